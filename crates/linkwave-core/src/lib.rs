pub mod animator;
pub mod attrs;
pub mod color;
pub mod config;
pub mod constants;
pub mod measure;
pub mod render;
pub mod ring;
pub mod scheduler;
pub mod wave;

pub use animator::*;
pub use attrs::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use measure::*;
pub use render::*;
pub use ring::*;
pub use scheduler::*;
pub use wave::*;
