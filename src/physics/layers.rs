use avian3d::prelude::*;

/// Collision layers for the physics simulation
#[derive(PhysicsLayer, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Player character
    Player,
    /// Static world geometry (floor)
    World,
    /// Dynamic boxes, both ambient and thrown
    Boxes,
}
