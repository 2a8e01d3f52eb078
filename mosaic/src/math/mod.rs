pub mod differential;
pub mod vec2;
pub mod vec4;

pub use differential::*;
pub use vec2::*;
pub use vec4::*;
