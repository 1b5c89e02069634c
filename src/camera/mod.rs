mod orbit;
mod plugin;

pub use orbit::*;
pub use plugin::CameraPlugin;
