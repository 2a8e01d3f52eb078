pub mod bake;
pub mod bicubic;
pub mod buffer;
pub mod format;
pub mod import;
pub mod object;
pub mod rgba;
pub mod sampler;
pub mod store;
pub mod tile;

pub use bake::*;
pub use bicubic::*;
pub use buffer::*;
pub use format::*;
pub use import::*;
pub use object::*;
pub use rgba::*;
pub use sampler::*;
pub use store::*;
pub use tile::*;
