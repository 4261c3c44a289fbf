use crate::primitives::color::ColorAlpha;

pub const WINDOW_TITLE: &str = "Two Body";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;
pub const CLEAR_COLOR: ColorAlpha = ColorAlpha {
    r: 0.2,
    g: 0.1,
    b: 0.3,
    a: 1.0,
};
pub const CONFIG_FILE: &str = "twobody.json";
pub const RESOURCE_CANDIDATES: [&str; 3] = ["assets/", "../assets/", "../../assets/"];
pub const SPHERE_PARALLELS: u32 = 50;
pub const SPHERE_MERIDIANS: u32 = 50;
pub const ORBIT_POINTS: usize = 256;
