use crate::error::{Error, Result};
use md5::{Digest, Md5};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[-_a-z0-9'+*$^&%=~!?{}]+(?:\.[-_a-z0-9'+*$^&%=~!?{}]+)*@(?:[a-z0-9](?:[-a-z0-9.]*[a-z0-9])?\.[a-z]{2,}|\d{1,3}(?:\.\d{1,3}){3})$",
    )
    .expect("email pattern is valid")
});

static CONTENT_DISPOSITION_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"filename="(.*)""#).expect("filename pattern is valid"));

/// Lower-case hex MD5 digest, the identifier form the service expects
pub fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// Trim and lower-case an email address before hashing
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Longest address allowed by RFC 5321
const MAX_EMAIL_LENGTH: usize = 254;

/// Check an email address against a standard address syntax
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LENGTH && EMAIL_PATTERN.is_match(email)
}

/// Validate an absolute http(s) URL
pub fn is_valid_url(url: &str) -> Result<()> {
    // Try to parse the URL
    let parsed_url = match url::Url::parse(url) {
        Ok(url) => url,
        Err(_) => return Err(Error::Validation("Invalid URL: ".to_string() + url)),
    };

    // Check scheme - must be http or https
    match parsed_url.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(Error::Validation(
                "URL must use http or https scheme".to_string(),
            ))
        }
    }

    match parsed_url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(Error::Validation(
            "URL must have a valid host".to_string(),
        )),
    }
}

/// Extract the quoted filename from a Content-Disposition header.
///
/// Names that are empty or would escape the destination directory are
/// treated as missing.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let name = CONTENT_DISPOSITION_FILENAME
        .captures(header)?
        .get(1)?
        .as_str()
        .trim();

    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return None;
    }

    Some(name.to_string())
}

/// Drop trailing and repeated separators from a directory path
pub fn normalize_destination(path: &Path) -> PathBuf {
    path.components().collect()
}

/// Escape a value for use inside a double-quoted HTML attribute
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
