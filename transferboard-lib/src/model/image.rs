//! Image URL type

use serde::Deserialize;
use serde::Serialize;

/// Size variants the image service encodes in its URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    Tiny,
    Small,
    #[default]
    Medium,
    Big,
}

impl ImageSize {
    /// Returns the marker used in the URL.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::Tiny => "tiny",
            ImageSize::Small => "small",
            ImageSize::Medium => "medium",
            ImageSize::Big => "big",
        }
    }
}

/// An image URL as returned by the service (usually the `tiny` variant).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Wraps a raw URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the URL as returned by the service.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the URL of another size variant.
    ///
    /// Replaces the first `tiny` marker; URLs without one are returned as is.
    pub fn sized(&self, size: ImageSize) -> String {
        self.0.replacen(ImageSize::Tiny.as_str(), size.as_str(), 1)
    }
}

impl std::fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_replaces_first_marker() {
        let url = ImageUrl::new("https://img.example/tiny/123.png?tiny=1");
        assert_eq!(
            url.sized(ImageSize::Medium),
            "https://img.example/medium/123.png?tiny=1"
        );
    }

    #[test]
    fn test_sized_without_marker() {
        let url = ImageUrl::new("https://img.example/flag/eng.png");
        assert_eq!(url.sized(ImageSize::Big), url.as_str());
    }
}
