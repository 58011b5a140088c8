/// Packed RGBA color
pub type Rgba = [u8; 4];

pub const ALIVE: Rgba = [0, 0, 0, 0xff];
pub const DEAD: Rgba = [200, 200, 200, 0xff];
pub const GRIDLINE: Rgba = [128, 128, 128, 0xff];
