use bevy::prelude::*;
use rand::Rng;

/// Five-color palettes, RGB bytes. The rows are the top entries of the
/// community `nice-color-palettes` set.
const PALETTES: [[(u8, u8, u8); 5]; 6] = [
    [
        (105, 210, 231),
        (167, 219, 216),
        (224, 228, 204),
        (243, 134, 48),
        (250, 105, 0),
    ],
    [
        (254, 67, 101),
        (252, 157, 154),
        (249, 205, 173),
        (200, 200, 169),
        (131, 175, 155),
    ],
    [
        (236, 208, 120),
        (217, 91, 67),
        (192, 41, 66),
        (84, 36, 55),
        (83, 119, 122),
    ],
    [
        (85, 98, 112),
        (78, 205, 196),
        (199, 244, 100),
        (255, 107, 107),
        (196, 77, 88),
    ],
    [
        (119, 79, 56),
        (224, 142, 121),
        (241, 212, 175),
        (236, 229, 206),
        (197, 224, 220),
    ],
    [
        (232, 221, 203),
        (205, 179, 128),
        (3, 101, 100),
        (3, 54, 73),
        (3, 22, 52),
    ],
];

/// The session's box colors. Picked once at startup and shared by every box
/// spawned afterwards; per-box randomness only chooses an index within it.
#[derive(Resource, Clone)]
pub struct BoxPalette([Color; 5]);

impl BoxPalette {
    /// Selects one of the fixed palettes.
    pub fn pick<R: Rng>(rng: &mut R) -> Self {
        let row = PALETTES[rng.gen_range(0..PALETTES.len())];
        Self(row.map(|(r, g, b)| Color::srgb_u8(r, g, b)))
    }

    /// One color out of the five, uniformly.
    pub fn random_color<R: Rng>(&self, rng: &mut R) -> Color {
        self.0[rng.gen_range(0..self.0.len())]
    }

    pub fn colors(&self) -> &[Color; 5] {
        &self.0
    }
}

impl FromWorld for BoxPalette {
    fn from_world(_world: &mut World) -> Self {
        Self::pick(&mut rand::thread_rng())
    }
}
