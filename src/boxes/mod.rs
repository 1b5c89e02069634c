mod ambient;
mod palette;
mod plugin;
mod shot;

pub use ambient::{spawn_ambient_boxes, AmbientBox, AMBIENT_BOX_COUNT};
pub use palette::BoxPalette;
pub use plugin::BoxesPlugin;
pub use shot::{launch_velocity, spin_velocity, throw_origin, ShotBox, ShotBoxes};
