use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct ColorAlpha {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorAlpha {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn light_blue() -> Self {
        Self::new(0.5, 0.5, 1.0, 1.0)
    }

    pub const fn light_red() -> Self {
        Self::new(1.0, 0.5, 0.5, 1.0)
    }
}
