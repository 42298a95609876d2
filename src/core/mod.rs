mod grid;
mod model_helpers;
mod models;

pub use grid::GameState;
pub use models::{Cell, Direction, MalformedLevelError, Vec2};
