pub mod color;
pub mod picture;
pub mod projector;
pub mod settings;
pub mod svg;

pub use color::Color;
pub use picture::{build_picture, Drawable, Picture};
pub use settings::RenderSettings;
