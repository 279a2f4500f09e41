use crate::config::{Options, HTTPS_HOST, HTTP_HOST, MAX_SIZE, MIN_SIZE};
use crate::error::{Error, Result};
use crate::file::extension_for_mime_type;
use crate::http::HttpClient;
use crate::models::{DefaultImage, DownloadResult, Rating};
use crate::utils::{
    escape_html, filename_from_content_disposition, is_valid_email, is_valid_url, md5_hex,
    normalize_destination, normalize_email,
};
use log::{debug, warn};
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use url::form_urlencoded;

/// Builder and resolver for avatar URLs, image tags and downloads.
///
/// Every `with_*` method validates its input before storing it, so a
/// `Gravatar` value is always well-formed. Nothing is cached between
/// requests.
#[derive(Debug, Clone)]
pub struct Gravatar {
    rating: Option<Rating>,
    size: Option<u32>,
    default_image: Option<DefaultImage>,
    force_default: bool,
    https: bool,
    destination: PathBuf,
    timeout: Duration,
    base_url: Option<String>,
}

impl Gravatar {
    /// Create a new resolver from the given options.
    ///
    /// Options are applied in a fixed order (destination, size, https, rating,
    /// default image, force default) through the same setters used afterwards.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;

        let mut gravatar = Self {
            rating: None,
            size: None,
            default_image: None,
            force_default: false,
            https: false,
            destination: PathBuf::new(),
            timeout: Duration::from_secs(options.get_timeout_seconds()),
            base_url: None,
        }
        .with_destination(options.get_destination())?;

        if let Some(size) = options.size {
            gravatar = gravatar.with_size(size)?;
        }
        if let Some(https) = options.https {
            gravatar = gravatar.with_https(https);
        }
        if let Some(rating) = &options.rating {
            gravatar = gravatar.with_rating(rating)?;
        }
        if let Some(default_image) = &options.default_image {
            gravatar = gravatar.with_default_image(default_image)?;
        }
        if let Some(force) = options.default_force {
            gravatar = gravatar.with_force_default(force);
        }
        if let Some(base_url) = &options.base_url {
            gravatar = gravatar.with_base_url(base_url)?;
        }

        Ok(gravatar)
    }

    /// Set the image size in pixels, between 1 and 2048 inclusive
    pub fn with_size(mut self, size: u32) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(Error::Validation(
                "Image size needs to be greater than 0".to_string(),
            ));
        }
        if size > MAX_SIZE {
            return Err(Error::Validation(format!(
                "Image size needs to be smaller or equal {MAX_SIZE}"
            )));
        }

        self.size = Some(size);
        Ok(self)
    }

    /// Set the content rating. Accepts any case and surrounding whitespace.
    pub fn with_rating(mut self, rating: impl AsRef<str>) -> Result<Self> {
        self.rating = Some(rating.as_ref().parse()?);
        Ok(self)
    }

    /// Set the default image: a service keyword or an absolute URL
    pub fn with_default_image(mut self, default_image: impl AsRef<str>) -> Result<Self> {
        self.default_image = Some(default_image.as_ref().parse()?);
        Ok(self)
    }

    pub fn with_force_default(mut self, force: bool) -> Self {
        self.force_default = force;
        self
    }

    pub fn with_https(mut self, enabled: bool) -> Self {
        self.https = enabled;
        self
    }

    /// Set the download directory. It must exist and be writable.
    pub fn with_destination(mut self, destination: impl AsRef<Path>) -> Result<Self> {
        let destination = normalize_destination(destination.as_ref());

        let metadata = match fs::metadata(&destination) {
            Ok(metadata) if metadata.is_dir() => metadata,
            _ => return Err(Error::DestinationNotDirectory(destination)),
        };

        // Mode bits alone miss ownership, so also probe with a real file.
        if metadata.permissions().readonly() || NamedTempFile::new_in(&destination).is_err() {
            return Err(Error::DestinationNotWritable(destination));
        }

        self.destination = destination;
        Ok(self)
    }

    /// Set the timeout applied to each HTTP request made by `download`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the service origin, e.g. with a self-hosted mirror
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = base_url.as_ref().trim().trim_end_matches('/');
        is_valid_url(base_url)?;

        self.base_url = Some(base_url.to_string());
        Ok(self)
    }

    pub fn size(&self) -> Option<u32> {
        self.size
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn default_image(&self) -> Option<&DefaultImage> {
        self.default_image.as_ref()
    }

    pub fn force_default(&self) -> bool {
        self.force_default
    }

    pub fn https_enabled(&self) -> bool {
        self.https
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Re-check the stored options, failing on the first malformed one
    pub fn validate(&self) -> Result<()> {
        if let Some(rating) = self.rating {
            rating.as_str().parse::<Rating>()?;
        }

        if let Some(size) = self.size {
            if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
                return Err(Error::Validation(format!(
                    "Image size {size} is out of range"
                )));
            }
        }

        if let Some(DefaultImage::Url(url)) = &self.default_image {
            is_valid_url(url)?;
        }

        Ok(())
    }

    /// Non-failing form of [`Gravatar::validate`]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Build the avatar URL for `email`.
    ///
    /// The email is trimmed and lower-cased before hashing but its syntax is
    /// not checked. Query parameters appear in `s, d, r, f` order and only
    /// when the backing option is set.
    pub fn url(&self, email: &str) -> Result<String> {
        self.validate()?;

        let origin = match &self.base_url {
            Some(base_url) => base_url.as_str(),
            None if self.https => HTTPS_HOST,
            None => HTTP_HOST,
        };

        let mut url = format!("{}/avatar/{}", origin, md5_hex(&normalize_email(email)));

        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(size) = self.size {
            query.append_pair("s", &size.to_string());
        }
        if let Some(default_image) = &self.default_image {
            query.append_pair("d", default_image.as_str());
        }
        if let Some(rating) = self.rating {
            query.append_pair("r", rating.as_str());
        }
        if self.force_default {
            query.append_pair("f", "y");
        }

        let query = query.finish();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        Ok(url)
    }

    /// Render an `<img>` tag for `email`.
    ///
    /// `width` and `height` default to the configured size; caller attributes
    /// override them (keys compared case-insensitively) and are otherwise
    /// appended in order. `src` is always the built URL.
    pub fn image(&self, email: &str, attributes: &[(&str, &str)]) -> Result<String> {
        if let Some((key, _)) = attributes.iter().find(|(key, _)| !is_valid_attribute_name(key)) {
            return Err(Error::Validation(format!(
                "Invalid attribute name passed: {key:?}"
            )));
        }

        let src = self.url(email)?;

        let mut merged: Vec<(String, String)> = Vec::new();
        if let Some(size) = self.size {
            merged.push(("width".to_string(), size.to_string()));
            merged.push(("height".to_string(), size.to_string()));
        }

        for (key, value) in attributes {
            if key.eq_ignore_ascii_case("src") {
                continue;
            }
            match merged.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
                Some(entry) => entry.1 = value.to_string(),
                None => merged.push((key.to_string(), value.to_string())),
            }
        }

        let mut tag = format!("<img src=\"{}\"", escape_html(&src));
        for (key, value) in &merged {
            tag.push_str(&format!(" {}=\"{}\"", key, escape_html(value)));
        }
        tag.push_str(" />");

        Ok(tag)
    }

    /// Download the avatar for `email` into the destination directory.
    ///
    /// The response must carry a supported image Content-Type. The filename is
    /// taken from Content-Disposition when present, otherwise it is the MD5 of
    /// the URL plus the extension of the content type. Nothing is written
    /// unless every check passes.
    pub async fn download(&self, email: &str) -> Result<DownloadResult> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(Error::Validation("Invalid email address passed".to_string()));
        }

        let url = self.url(&email)?;
        let http_client = HttpClient::new(self.timeout)?;

        let headers = http_client.probe(&url).await?;

        let content_type = headers
            .get(CONTENT_TYPE)
            .ok_or(Error::ContentTypeMissing)?
            .to_str()
            .map_err(|_| Error::ContentTypeInvalid("non-ASCII header value".to_string()))?;

        let extension = extension_for_mime_type(content_type).ok_or_else(|| {
            warn!("Unsupported Content-Type {content_type:?} for {url}");
            Error::ContentTypeInvalid(content_type.to_string())
        })?;

        let filename = match headers.get(CONTENT_DISPOSITION) {
            Some(value) => value
                .to_str()
                .ok()
                .and_then(filename_from_content_disposition)
                .ok_or(Error::FilenameNotFound)?,
            None => format!("{}.{}", md5_hex(&url), extension),
        };

        let body = http_client.fetch(&url).await?;
        let location = self.destination.join(&filename);

        save_file(self.destination.clone(), location.clone(), body).await?;
        debug!("Saved avatar to {}", location.display());

        Ok(DownloadResult {
            filename,
            extension: extension.to_string(),
            location,
        })
    }
}

/// HTML attribute names must be non-empty and free of quotes, `<`, `>`, `=`,
/// `/` and whitespace.
fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '=' | '/'))
}

/// Write `body` to `location` through a temporary file in `dir`, so a failed
/// write never leaves a partial file behind.
async fn save_file(dir: PathBuf, location: PathBuf, body: Vec<u8>) -> Result<()> {
    tokio::task::spawn_blocking(move || -> std::io::Result<()> {
        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(&body)?;
        file.as_file().sync_all()?;
        file.persist(&location)?;
        Ok(())
    })
    .await
    .map_err(|e| Error::DownloadFailed(e.to_string()))?
    .map_err(|e| Error::DownloadFailed(e.to_string()))
}
