mod floor;
mod grid;
mod lighting;
mod plugin;

pub use floor::{Floor, FLOOR_POSITION, FLOOR_SIZE};
pub use plugin::ScenePlugin;
