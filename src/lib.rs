//! # Gravatar SDK
//!
//! Build avatar URLs for the Gravatar service, render `<img>` tags for them,
//! and download the resolved image to a local directory.
//!
//! ## Building URLs and Image Tags
//!
//! ```no_run
//! use gravatar::{Gravatar, Options, Rating};
//!
//! fn main() -> Result<(), gravatar::Error> {
//!     let gravatar = Gravatar::new(Options {
//!         size: Some(80),
//!         https: Some(true),
//!         ..Default::default()
//!     })?
//!     .with_rating(Rating::Pg)?
//!     .with_default_image("identicon")?;
//!
//!     // https://secure.gravatar.com/avatar/<md5>?s=80&d=identicon&r=pg
//!     println!("{}", gravatar.url("Someone@Example.com")?);
//!
//!     // <img src="..." width="80" height="80" alt="Someone" />
//!     println!("{}", gravatar.image("someone@example.com", &[("alt", "Someone")])?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Downloading an Avatar
//!
//! ```no_run
//! use gravatar::{Gravatar, Options};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gravatar = Gravatar::new(Options {
//!         destination: Some("./avatars".into()),
//!         size: Some(200),
//!         ..Default::default()
//!     })?;
//!
//!     let result = gravatar.download("someone@example.com").await?;
//!     println!("Saved {} to {}", result.filename, result.location.display());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod file;
mod http;
mod models;
mod utils;

// Re-exports
pub use client::Gravatar;
pub use config::{Options, DEFAULT_TIMEOUT_SECONDS, HTTPS_HOST, HTTP_HOST, MAX_SIZE, MIN_SIZE};
pub use error::{Error, Result};
pub use file::{extension_for_mime_type, ImageTypeConfig, SUPPORTED_IMAGE_TYPES};
pub use models::{DefaultImage, DownloadResult, Rating};
pub use utils::{is_valid_email, md5_hex};
