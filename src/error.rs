use std::path::PathBuf;
use thiserror::Error;

/// Custom result type for the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Gravatar SDK
///
/// Every variant maps to a stable numeric code (see [`Error::code`]) so callers
/// can branch on the failure kind without parsing messages.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid option value (size, rating, default image, email, base URL)
    #[error("Invalid option: {0}")]
    Validation(String),

    /// Download destination does not exist or is not a directory
    #[error("Download destination is not a directory: {}", .0.display())]
    DestinationNotDirectory(PathBuf),

    /// Download destination is read-only
    #[error("Download destination is not writable: {}", .0.display())]
    DestinationNotWritable(PathBuf),

    /// The avatar URL could not be reached
    #[error("URL does not seem to exist: {0}")]
    UrlUnreachable(String),

    /// The response carried no Content-Type header
    #[error("Download - Content-Type not found")]
    ContentTypeMissing,

    /// The response carried a Content-Type that is not a supported image
    #[error("Download - Content-Type invalid: {0}")]
    ContentTypeInvalid(String),

    /// Content-Disposition was present but held no usable filename
    #[error("Download - Filename not found")]
    FilenameNotFound,

    /// Fetching the body or writing the file failed
    #[error("Download - File could not been downloaded: {0}")]
    DownloadFailed(String),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Stable numeric code of the error kind. `0` is the generic code shared by
    /// validation failures.
    pub fn code(&self) -> u16 {
        match self {
            Error::DestinationNotDirectory(_) => 100,
            Error::DestinationNotWritable(_) => 105,
            Error::UrlUnreachable(_) => 200,
            Error::ContentTypeMissing => 300,
            Error::ContentTypeInvalid(_) => 305,
            Error::FilenameNotFound => 315,
            Error::DownloadFailed(_) => 400,
            Error::Validation(_)
            | Error::RequestError(_)
            | Error::JsonError(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;
    use std::path::PathBuf;

    #[test]
    fn test_error_display() {
        let errors = [
            (
                Error::Validation("Invalid rating passed".to_string()),
                "Invalid option: Invalid rating passed",
            ),
            (
                Error::DestinationNotDirectory(PathBuf::from("/nope")),
                "Download destination is not a directory: /nope",
            ),
            (
                Error::UrlUnreachable("connection refused".to_string()),
                "URL does not seem to exist: connection refused",
            ),
            (Error::ContentTypeMissing, "Download - Content-Type not found"),
            (
                Error::ContentTypeInvalid("text/html".to_string()),
                "Download - Content-Type invalid: text/html",
            ),
            (Error::FilenameNotFound, "Download - Filename not found"),
        ];

        for (error, expected_message) in errors {
            assert_eq!(error.to_string(), expected_message);
        }
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::Validation("x".into()).code(), 0);
        assert_eq!(Error::DestinationNotDirectory(PathBuf::new()).code(), 100);
        assert_eq!(Error::DestinationNotWritable(PathBuf::new()).code(), 105);
        assert_eq!(Error::UrlUnreachable("x".into()).code(), 200);
        assert_eq!(Error::ContentTypeMissing.code(), 300);
        assert_eq!(Error::ContentTypeInvalid("x".into()).code(), 305);
        assert_eq!(Error::FilenameNotFound.code(), 315);
        assert_eq!(Error::DownloadFailed("x".into()).code(), 400);
    }

    #[test]
    fn test_error_from_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();

        match error {
            Error::JsonError(_) => {} // Success
            _ => panic!("Expected JsonError variant"),
        }
        assert_eq!(error.code(), 0);
    }
}
