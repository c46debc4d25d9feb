//! Upload directory handling for product images.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};

const DEFAULT_EXTENSION: &str = "png";

/// Standard alphabet, padding accepted but not required.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]").unwrap());

/// Writes decoded images into a single local directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Creates the directory (and parents) if it does not exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> ProductResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            ProductError::Storage(format!("cannot create {}: {}", dir.display(), e))
        })?;
        info!(dir = %dir.display(), "Upload directory ready");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Decodes `payload` and writes it under a fresh collision-free name.
    ///
    /// Returns `None` when there is nothing to store. The returned value is
    /// the bare file name, ready to be kept on the product.
    pub async fn store(
        &self,
        payload: Option<&str>,
        original_name: Option<&str>,
    ) -> ProductResult<Option<String>> {
        let Some(payload) = payload.filter(|p| !p.trim().is_empty()) else {
            return Ok(None);
        };

        let (extension, data) = split_data_uri(payload);
        let bytes = BASE64.decode(data.trim())?;
        let file_name = generate_file_name(original_name, extension);

        tokio::fs::write(self.dir.join(&file_name), &bytes)
            .await
            .map_err(|e| ProductError::Storage(format!("cannot write {}: {}", file_name, e)))?;

        debug!(file = %file_name, size = bytes.len(), "Stored product image");
        Ok(Some(file_name))
    }

    /// Removes a stored image. Failures, a missing file included, are ignored.
    pub async fn delete(&self, stored_name: Option<&str>) {
        let Some(stored_name) = stored_name.filter(|n| !n.trim().is_empty()) else {
            return;
        };

        let normalized = stored_name.replace('\\', "/");
        let Some(file_name) = normalized.rsplit('/').next().filter(|n| !n.is_empty()) else {
            return;
        };

        let path = self.dir.join(file_name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => debug!(file = %file_name, "Deleted product image"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(file = %file_name, "Product image already gone")
            }
            Err(e) => warn!(file = %file_name, error = %e, "Could not delete product image"),
        }
    }
}

/// Splits an optional `data:image/<ext>;base64,` header off the payload.
fn split_data_uri(payload: &str) -> (&str, &str) {
    match payload.split_once(',') {
        Some((header, data)) => (extension_from_header(header), data),
        None => (DEFAULT_EXTENSION, payload),
    }
}

fn extension_from_header(header: &str) -> &str {
    match (header.find('/'), header.find(';')) {
        (Some(slash), Some(semi)) if semi > slash + 1 => &header[slash + 1..semi],
        _ => DEFAULT_EXTENSION,
    }
}

/// `<32 hex>_<sanitized base>[.<ext>]`
fn generate_file_name(original_name: Option<&str>, extension: &str) -> String {
    let base = match original_name.filter(|n| !n.trim().is_empty()) {
        Some(name) => name.to_string(),
        None => Uuid::new_v4().to_string(),
    };
    let mut sanitized = UNSAFE_CHARS.replace_all(&base, "_").into_owned();
    if !sanitized.contains('.') {
        sanitized.push('.');
        sanitized.push_str(extension);
    }
    format!("{}_{}", Uuid::new_v4().simple(), sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

    fn store() -> (TempDir, ImageStore) {
        let tmp = TempDir::new().unwrap();
        let store = ImageStore::new(tmp.path().join("uploads")).unwrap();
        (tmp, store)
    }

    fn token_and_rest(name: &str) -> (&str, &str) {
        name.split_once('_').unwrap()
    }

    #[test]
    fn test_new_creates_nested_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a/b/uploads");
        let store = ImageStore::new(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
    }

    #[test]
    fn test_new_fails_when_path_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("taken");
        std::fs::write(&file, b"x").unwrap();
        let err = ImageStore::new(&file).unwrap_err();
        assert!(matches!(err, ProductError::Storage(_)));
    }

    #[test]
    fn test_extension_from_header() {
        assert_eq!(extension_from_header("data:image/jpeg;base64"), "jpeg");
        assert_eq!(extension_from_header("data:image/;base64"), "png");
        assert_eq!(extension_from_header("data:image/gif"), "png");
        assert_eq!(extension_from_header("data;image/gif"), "png");
        assert_eq!(extension_from_header(""), "png");
    }

    #[test]
    fn test_generate_file_name_sanitizes_and_prefixes() {
        let name = generate_file_name(Some("my photo (1).jpg"), "png");
        let (token, rest) = token_and_rest(&name);
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(rest, "my_photo__1_.jpg");
    }

    #[test]
    fn test_generate_file_name_appends_extension_when_missing() {
        let name = generate_file_name(Some("avatar"), "gif");
        assert!(name.ends_with("_avatar.gif"));

        let random = generate_file_name(None, "webp");
        let (token, rest) = token_and_rest(&random);
        assert_eq!(token.len(), 32);
        assert!(rest.ends_with(".webp"));
    }

    #[tokio::test]
    async fn test_store_skips_blank_payload() {
        let (_tmp, store) = store();
        assert_eq!(store.store(None, Some("a.png")).await.unwrap(), None);
        assert_eq!(store.store(Some("   "), None).await.unwrap(), None);
        test_utils::assertions::assert_dir_empty(store.dir());
    }

    #[tokio::test]
    async fn test_store_writes_decoded_bytes() {
        let (_tmp, store) = store();
        let name = store.store(Some(PNG), None).await.unwrap().unwrap();

        assert!(name.ends_with(".png"));
        let bytes = std::fs::read(store.dir().join(&name)).unwrap();
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[tokio::test]
    async fn test_store_accepts_raw_payload_without_padding() {
        let (_tmp, store) = store();
        let name = store
            .store(Some("aGVsbG8"), Some("greeting"))
            .await
            .unwrap()
            .unwrap();

        assert!(name.ends_with("_greeting.png"));
        assert_eq!(std::fs::read(store.dir().join(&name)).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_store_rejects_invalid_base64() {
        let (_tmp, store) = store();
        let err = store.store(Some("data:image/png;base64,@@@"), None).await.unwrap_err();
        assert!(matches!(err, ProductError::InvalidImage(_)));
        test_utils::assertions::assert_dir_empty(store.dir());
    }

    #[tokio::test]
    async fn test_store_same_original_name_twice_gives_distinct_files() {
        let (_tmp, store) = store();
        let first = store.store(Some(PNG), Some("beans.png")).await.unwrap().unwrap();
        let second = store.store(Some(PNG), Some("beans.png")).await.unwrap().unwrap();

        assert_ne!(first, second);
        test_utils::assertions::assert_file_exists(store.dir(), &first);
        test_utils::assertions::assert_file_exists(store.dir(), &second);
    }

    #[tokio::test]
    async fn test_delete_uses_last_path_segment() {
        let (_tmp, store) = store();
        let name = store.store(Some(PNG), None).await.unwrap().unwrap();

        store.delete(Some(&format!("\\uploads\\{}", name))).await;
        assert!(!store.dir().join(&name).exists());
    }

    #[tokio::test]
    async fn test_delete_ignores_missing_and_blank() {
        let (_tmp, store) = store();
        store.delete(Some("does-not-exist.png")).await;
        store.delete(Some("")).await;
        store.delete(Some("/uploads/")).await;
        store.delete(None).await;
    }
}
