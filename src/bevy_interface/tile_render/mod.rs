mod models;
mod plugin;
mod systems;

pub use models::{TileType, Tiles};
pub use plugin::*;
