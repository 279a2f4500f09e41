use crate::error::{Error, Result};
use crate::utils::is_valid_url;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Content rating of the returned image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    /// Suitable for display on all websites
    G,
    /// May contain rude gestures or mild violence
    Pg,
    /// May contain harsh profanity or intense violence
    R,
    /// May contain hardcore sexual imagery
    X,
}

impl Rating {
    /// Value sent in the `r` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::G => "g",
            Rating::Pg => "pg",
            Rating::R => "r",
            Rating::X => "x",
        }
    }
}

impl FromStr for Rating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "g" => Ok(Rating::G),
            "pg" => Ok(Rating::Pg),
            "r" => Ok(Rating::R),
            "x" => Ok(Rating::X),
            _ => Err(Error::Validation(format!("Invalid rating passed: {s}"))),
        }
    }
}

impl AsRef<str> for Rating {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image served when no avatar is registered for the email hash
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DefaultImage {
    /// Respond with HTTP 404 instead of an image
    NotFound,
    /// Mystery-man silhouette
    MysteryMan,
    /// Geometric pattern derived from the hash
    Identicon,
    /// Generated monster
    MonsterId,
    /// Generated face
    Wavatar,
    /// 8-bit arcade-style face
    Retro,
    /// Transparent PNG
    Blank,
    /// Custom image at an absolute URL
    Url(String),
}

impl DefaultImage {
    /// Keywords accepted by the service, in the order they are reported
    pub const KEYWORDS: [&'static str; 7] = [
        "404",
        "mm",
        "identicon",
        "monsterid",
        "wavatar",
        "retro",
        "blank",
    ];

    /// Value sent in the `d` query parameter, before URL encoding
    pub fn as_str(&self) -> &str {
        match self {
            DefaultImage::NotFound => "404",
            DefaultImage::MysteryMan => "mm",
            DefaultImage::Identicon => "identicon",
            DefaultImage::MonsterId => "monsterid",
            DefaultImage::Wavatar => "wavatar",
            DefaultImage::Retro => "retro",
            DefaultImage::Blank => "blank",
            DefaultImage::Url(url) => url,
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, DefaultImage::Url(_))
    }
}

impl FromStr for DefaultImage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();

        if is_valid_url(value).is_ok() {
            return Ok(DefaultImage::Url(value.to_string()));
        }

        match value {
            "404" => Ok(DefaultImage::NotFound),
            "mm" => Ok(DefaultImage::MysteryMan),
            "identicon" => Ok(DefaultImage::Identicon),
            "monsterid" => Ok(DefaultImage::MonsterId),
            "wavatar" => Ok(DefaultImage::Wavatar),
            "retro" => Ok(DefaultImage::Retro),
            "blank" => Ok(DefaultImage::Blank),
            _ => Err(Error::Validation(format!(
                "Invalid default image passed (valid: {})",
                Self::KEYWORDS.join(",")
            ))),
        }
    }
}

impl AsRef<str> for DefaultImage {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DefaultImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful download
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadResult {
    /// Name of the saved file
    pub filename: String,

    /// Extension derived from the response Content-Type
    pub extension: String,

    /// Full path of the saved file
    pub location: PathBuf,
}
