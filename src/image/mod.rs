//! Banner image resolution.
//!
//! The create call uploads the banner as a local file, so a remote
//! third-party photo reference has to be downloaded into the local
//! cache first. Unlike day locations, a failure here is fatal: without
//! a local file there is nothing to upload, and the submission must
//! abort before any create call is made.

use crate::error::{Error, Result};
use regex::Regex;
use reqwest::Client;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use url::Url;

/// Remote third-party photo references are plain http(s) URLs
static REMOTE_PHOTO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("valid pattern"));

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A banner reference resolved to an uploadable local file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBanner {
    /// Local file path handed to the multipart upload
    pub path: PathBuf,
    /// Canonical `file://` form of the same path
    pub uri: Url,
}

/// Whether a banner reference points at a remote third-party photo
#[must_use]
pub fn is_remote_photo(reference: &str) -> bool {
    REMOTE_PHOTO_RE.is_match(reference.trim())
}

/// Resolves banner references into locally-uploadable files
pub struct ImageResolver {
    client: Client,
    cache_dir: PathBuf,
}

impl ImageResolver {
    /// Resolver writing into the platform cache directory
    #[must_use]
    pub fn new() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("tripflow");
        Self::with_cache_dir(cache_dir)
    }

    /// Resolver writing into a specific cache directory
    #[must_use]
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            cache_dir: cache_dir.into(),
        }
    }

    /// Deterministic cache path for a remote photo URL
    #[must_use]
    pub fn cache_path(&self, url: &str) -> PathBuf {
        let mut hasher = DefaultHasher::new();
        url.hash(&mut hasher);
        let ext = Path::new(url.split('?').next().unwrap_or(url))
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| e.len() <= 4)
            .unwrap_or("jpg")
            .to_string();
        self.cache_dir
            .join(format!("banner-{:016x}.{ext}", hasher.finish()))
    }

    /// Resolve a banner reference to a local file.
    ///
    /// Remote photo URLs are downloaded into the cache; local paths and
    /// `file://` URIs pass through. Either way the result carries the
    /// canonical `file://` URI for the verified local file.
    pub async fn resolve(&self, reference: &str) -> Result<ResolvedBanner> {
        let reference = reference.trim();
        if is_remote_photo(reference) {
            self.download(reference).await
        } else {
            Self::local(reference).await
        }
    }

    async fn download(&self, url: &str) -> Result<ResolvedBanner> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::ImageResolution(format!("download of {url} failed: {e}")))?
            .bytes()
            .await
            .map_err(|e| Error::ImageResolution(format!("download of {url} failed: {e}")))?;

        tokio::fs::create_dir_all(&self.cache_dir)
            .await
            .map_err(|e| Error::ImageResolution(format!("cannot create image cache: {e}")))?;

        let path = self.cache_path(url);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| Error::ImageResolution(format!("cannot write image cache: {e}")))?;

        tracing::debug!(url, path = %path.display(), size = bytes.len(), "banner downloaded");
        Self::canonical(path)
    }

    async fn local(reference: &str) -> Result<ResolvedBanner> {
        let path = Url::parse(reference).ok().map_or_else(
            || PathBuf::from(reference),
            |url| {
                url.to_file_path()
                    .unwrap_or_else(|()| PathBuf::from(reference))
            },
        );

        let path = tokio::fs::canonicalize(&path).await.map_err(|e| {
            Error::ImageResolution(format!("local banner {} not readable: {e}", path.display()))
        })?;

        Self::canonical(path)
    }

    fn canonical(path: PathBuf) -> Result<ResolvedBanner> {
        let absolute = if path.is_absolute() {
            path
        } else {
            std::env::current_dir()?.join(path)
        };
        let uri = Url::from_file_path(&absolute).map_err(|()| {
            Error::ImageResolution(format!("cannot form file URI for {}", absolute.display()))
        })?;
        Ok(ResolvedBanner {
            path: absolute,
            uri,
        })
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_pattern_matches_http_urls_only() {
        assert!(is_remote_photo("https://photos.example.com/goa.jpg"));
        assert!(is_remote_photo("http://photos.example.com/goa.jpg"));
        assert!(!is_remote_photo("/home/me/goa.jpg"));
        assert!(!is_remote_photo("file:///home/me/goa.jpg"));
    }

    #[test]
    fn cache_path_is_deterministic_and_keeps_extension() {
        let resolver = ImageResolver::with_cache_dir("/tmp/tripflow-test");
        let a = resolver.cache_path("https://photos.example.com/goa.png?w=800");
        let b = resolver.cache_path("https://photos.example.com/goa.png?w=800");
        let c = resolver.cache_path("https://photos.example.com/other.png");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.extension().and_then(|e| e.to_str()), Some("png"));
    }

    #[tokio::test]
    async fn local_path_passes_through_as_file_uri() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("banner.jpg");
        std::fs::write(&file, b"jpeg bytes").unwrap();

        let resolver = ImageResolver::with_cache_dir(dir.path());
        let resolved = resolver.resolve(file.to_str().unwrap()).await.unwrap();

        assert_eq!(resolved.uri.scheme(), "file");
        assert!(resolved.path.ends_with("banner.jpg"));
    }

    #[tokio::test]
    async fn file_uri_input_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("banner.jpg");
        std::fs::write(&file, b"jpeg bytes").unwrap();
        let uri = Url::from_file_path(&file).unwrap();

        let resolver = ImageResolver::with_cache_dir(dir.path());
        let resolved = resolver.resolve(uri.as_str()).await.unwrap();

        assert!(resolved.path.ends_with("banner.jpg"));
    }

    #[tokio::test]
    async fn missing_local_file_is_fatal() {
        let resolver = ImageResolver::with_cache_dir("/tmp/tripflow-test");
        let err = resolver.resolve("/nonexistent/banner.jpg").await.unwrap_err();
        assert!(matches!(err, Error::ImageResolution(_)));
    }
}
