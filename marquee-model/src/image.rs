use std::fmt::Display;
use std::fmt::Formatter;

/// Image variants a server can render for an item
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ImageType {
    /// Tall cover art (2:3 aspect ratio)
    Primary,
    /// Wide backdrop/banner art (16:9 aspect ratio)
    Backdrop,
    /// Small grid thumbnail
    Thumb,
    /// Transparent title treatment
    Logo,
}

impl Display for ImageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageType::Primary => write!(f, "Primary"),
            ImageType::Backdrop => write!(f, "Backdrop"),
            ImageType::Thumb => write!(f, "Thumb"),
            ImageType::Logo => write!(f, "Logo"),
        }
    }
}

/// Render parameters for a single image request.
///
/// Dimensions are integer pixel counts; callers working in layout units
/// truncate toward zero when converting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ImageOptions {
    pub width: u32,
    pub height: u32,
    pub image_type: ImageType,
}

impl ImageOptions {
    /// Backdrop request at the given layout dimensions.
    pub fn backdrop(width: f64, height: f64) -> Self {
        Self {
            width: width as u32,
            height: height as u32,
            image_type: ImageType::Backdrop,
        }
    }
}
