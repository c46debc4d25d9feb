use crate::{ConfigError, FromEnv, env_or_default, env_parse};
use std::path::PathBuf;

/// Where uploaded product images live on disk and under which URL they are served.
///
/// The mapper's public prefix and the static file mount are both derived from
/// `url_prefix`, so they always agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadConfig {
    pub dir: PathBuf,
    /// Normalised route segment without surrounding slashes, e.g. `uploads`
    url_prefix: String,
    /// Largest accepted create request. Images travel base64 encoded inside
    /// JSON, so this is roughly 4/3 of the largest image plus the other fields.
    pub max_request_bytes: usize,
}

/// 24 MiB of JSON, enough for an image of about 18 MiB.
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 24 * 1024 * 1024;

impl UploadConfig {
    pub fn new(dir: impl Into<PathBuf>, url_prefix: &str) -> Result<Self, ConfigError> {
        let url_prefix = url_prefix.trim().trim_matches('/').to_string();
        if url_prefix.is_empty() {
            return Err(ConfigError::ParseError {
                key: "UPLOAD_URL_PREFIX".to_string(),
                details: "must contain at least one path segment".to_string(),
            });
        }

        Ok(Self {
            dir: dir.into(),
            url_prefix,
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        })
    }

    pub fn with_max_request_bytes(mut self, max_request_bytes: usize) -> Self {
        self.max_request_bytes = max_request_bytes;
        self
    }

    /// Prefix prepended to stored filenames in responses, e.g. `/uploads/`
    pub fn public_prefix(&self) -> String {
        format!("/{}/", self.url_prefix)
    }

    /// Route at which the upload directory is mounted, e.g. `/uploads`
    pub fn mount_path(&self) -> String {
        format!("/{}", self.url_prefix)
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("uploads"),
            url_prefix: "uploads".to_string(),
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }
}

impl FromEnv for UploadConfig {
    /// - `UPLOAD_DIR`: defaults to `uploads` (relative to the working directory)
    /// - `UPLOAD_URL_PREFIX`: defaults to `/uploads`
    /// - `UPLOAD_MAX_BYTES`: request body limit for creates, defaults to 24 MiB
    fn from_env() -> Result<Self, ConfigError> {
        let dir = env_or_default("UPLOAD_DIR", "uploads");
        let prefix = env_or_default("UPLOAD_URL_PREFIX", "/uploads");
        let max_request_bytes =
            env_parse("UPLOAD_MAX_BYTES", &DEFAULT_MAX_REQUEST_BYTES.to_string())?;
        Ok(Self::new(dir, &prefix)?.with_max_request_bytes(max_request_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_config_defaults() {
        temp_env::with_vars(
            [
                ("UPLOAD_DIR", None::<&str>),
                ("UPLOAD_URL_PREFIX", None),
                ("UPLOAD_MAX_BYTES", None),
            ],
            || {
                let config = UploadConfig::from_env().unwrap();
                assert_eq!(config, UploadConfig::default());
                assert_eq!(config.dir, PathBuf::from("uploads"));
                assert_eq!(config.public_prefix(), "/uploads/");
                assert_eq!(config.mount_path(), "/uploads");
                assert_eq!(config.max_request_bytes, DEFAULT_MAX_REQUEST_BYTES);
            },
        );
    }

    #[test]
    fn test_upload_config_max_request_bytes_from_env() {
        temp_env::with_var("UPLOAD_MAX_BYTES", Some("1048576"), || {
            let config = UploadConfig::from_env().unwrap();
            assert_eq!(config.max_request_bytes, 1024 * 1024);
        });

        temp_env::with_var("UPLOAD_MAX_BYTES", Some("lots"), || {
            let err = UploadConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("UPLOAD_MAX_BYTES"));
        });
    }

    #[test]
    fn test_upload_config_normalises_prefix() {
        temp_env::with_vars(
            [
                ("UPLOAD_DIR", Some("/var/lib/catalog/images")),
                ("UPLOAD_URL_PREFIX", Some("media/images/")),
            ],
            || {
                let config = UploadConfig::from_env().unwrap();
                assert_eq!(config.dir, PathBuf::from("/var/lib/catalog/images"));
                assert_eq!(config.public_prefix(), "/media/images/");
                assert_eq!(config.mount_path(), "/media/images");
            },
        );
    }

    #[test]
    fn test_upload_config_rejects_empty_prefix() {
        let err = UploadConfig::new("uploads", " / ").unwrap_err();
        assert!(err.to_string().contains("UPLOAD_URL_PREFIX"));
    }
}
