#[derive(Debug)]
pub struct ImageTypeConfig {
    pub mime_type: &'static str,
    pub extension: &'static str,
}

/// Content types accepted by `download`
pub const SUPPORTED_IMAGE_TYPES: &[ImageTypeConfig] = &[
    ImageTypeConfig {
        mime_type: "image/jpg",
        extension: "jpg",
    },
    ImageTypeConfig {
        mime_type: "image/jpeg",
        extension: "jpg",
    },
    ImageTypeConfig {
        mime_type: "image/png",
        extension: "png",
    },
    ImageTypeConfig {
        mime_type: "image/gif",
        extension: "gif",
    },
];

/// Media type without parameters, lower-cased: `Image/PNG; q=1` -> `image/png`
fn mime_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// File extension for a supported image content type
pub fn extension_for_mime_type(content_type: &str) -> Option<&'static str> {
    let essence = mime_essence(content_type);
    SUPPORTED_IMAGE_TYPES
        .iter()
        .find(|t| t.mime_type == essence)
        .map(|t| t.extension)
}
