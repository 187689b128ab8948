//! Value types shared by the view rows

mod image;
mod money;

pub use image::ImageSize;
pub use image::ImageUrl;
pub use money::Money;
