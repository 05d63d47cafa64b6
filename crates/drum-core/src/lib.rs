pub mod audio;
pub mod color;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod layout;
pub mod palette;
pub mod provider;
pub mod render;
pub mod source;
pub mod spawn;

pub use audio::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use layout::*;
pub use palette::*;
pub use provider::*;
pub use source::*;
pub use spawn::*;
