pub mod math;
pub mod texture;
