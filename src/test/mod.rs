mod test_grid;
mod test_levels;
pub mod test_util;
