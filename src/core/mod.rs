pub mod constants;
pub mod particles;
pub mod slideshow;
pub mod tones;

pub use constants::*;
pub use particles::*;
pub use slideshow::*;
pub use tones::*;
