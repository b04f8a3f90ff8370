//! Camera snapshot lookup and the static-file allow-list.
//!
//! Image files follow `county_city_park_camera.ext`. The directory is listed
//! once at startup; lookups and serving only ever consult that listing.

use log::{debug, warn};
use std::path::PathBuf;

use crate::api::CameraImage;
use crate::config::ImageSettings;

/// Errors raised while resolving a static image request.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("\"{0}\" is excluded from the allowed static files")]
    NotAllowed(String),

    #[error("failed to read image {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// The four parts of a snapshot file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageName<'a> {
    pub county: &'a str,
    pub city: &'a str,
    pub park: &'a str,
    pub camera: &'a str,
}

/// Split a file name's stem (text before the first `.`) on `_`.
///
/// Names that don't have exactly four parts yield `None`.
pub fn parse_image_name(file_name: &str) -> Option<ImageName<'_>> {
    let stem = file_name.split('.').next()?;
    let mut parts = stem.split('_');
    let name = ImageName {
        county: parts.next()?,
        city: parts.next()?,
        park: parts.next()?,
        camera: parts.next()?,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(name)
}

/// Snapshot files available at startup.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    directory: PathBuf,
    route: String,
    default_image: String,
    files: Vec<String>,
}

impl ImageCatalog {
    /// Build a catalog from an explicit listing, sorted for stable lookups.
    pub fn from_listing(settings: &ImageSettings, mut files: Vec<String>) -> Self {
        files.sort();
        files.dedup();
        Self {
            directory: settings.directory.clone(),
            route: settings.route.clone(),
            default_image: settings.default_image.clone(),
            files,
        }
    }

    /// List `settings.directory` for files with the configured extension.
    ///
    /// A missing directory gives an empty catalog: every lookup then falls
    /// back to the placeholder.
    pub fn scan(settings: &ImageSettings) -> std::io::Result<Self> {
        let suffix = format!(".{}", settings.extension);
        let entries = match std::fs::read_dir(&settings.directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "image directory {} does not exist; serving placeholders only",
                    settings.directory.display()
                );
                return Ok(Self::from_listing(settings, Vec::new()));
            }
            Err(e) => return Err(e),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(&suffix) {
                    files.push(name.to_string());
                }
            }
        }
        debug!("found {} images in {}", files.len(), settings.directory.display());
        Ok(Self::from_listing(settings, files))
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// URL prefix images are served under, e.g. `/static/`.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// First listed file whose name matches the park/camera pair.
    pub fn find(&self, park: &str, camera: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|file| {
                parse_image_name(file)
                    .map(|name| name.park == park && name.camera == camera)
                    .unwrap_or(false)
            })
            .map(String::as_str)
    }

    /// Image source for a selection, or the placeholder.
    pub fn image_for(&self, park: Option<&str>, camera: Option<&str>) -> CameraImage {
        let found = match (park, camera) {
            (Some(park), Some(camera)) => self.find(park, camera),
            _ => None,
        };
        match found {
            Some(file) => CameraImage {
                src: format!("{}{}", self.route, file),
                matched: true,
            },
            None => CameraImage {
                src: format!("{}{}", self.route, self.default_image),
                matched: false,
            },
        }
    }

    pub fn is_allowed(&self, file_name: &str) -> bool {
        self.files.iter().any(|f| f == file_name)
    }

    /// Path of an allow-listed file. Names outside the startup listing are
    /// rejected without touching the filesystem.
    pub fn resolve(&self, file_name: &str) -> Result<PathBuf, ImageError> {
        if !self.is_allowed(file_name) {
            return Err(ImageError::NotAllowed(file_name.to_string()));
        }
        Ok(self.directory.join(file_name))
    }

    /// Read an allow-listed file.
    pub async fn read(&self, file_name: &str) -> Result<Vec<u8>, ImageError> {
        let path = self.resolve(file_name)?;
        tokio::fs::read(&path).await.map_err(|source| ImageError::Io {
            name: file_name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn settings(directory: &Path) -> ImageSettings {
        ImageSettings {
            directory: directory.to_path_buf(),
            ..ImageSettings::default()
        }
    }

    fn catalog() -> ImageCatalog {
        ImageCatalog::from_listing(
            &settings(Path::new("resources")),
            vec![
                "Halifax_Enfield_Br_C2.JPG".to_string(),
                "default_image.JPG".to_string(),
                "Edgecombe_Tarboro_Br_C1.JPG".to_string(),
                "broken-name.JPG".to_string(),
                "Too_Many_Parts_Br_C1.JPG".to_string(),
            ],
        )
    }

    #[test]
    fn test_parse_image_name() {
        let name = parse_image_name("Edgecombe_Tarboro_Br_C1.JPG").unwrap();
        assert_eq!(name.county, "Edgecombe");
        assert_eq!(name.city, "Tarboro");
        assert_eq!(name.park, "Br");
        assert_eq!(name.camera, "C1");
    }

    #[test]
    fn test_parse_image_name_rejects_other_shapes() {
        assert!(parse_image_name("default_image.JPG").is_none());
        assert!(parse_image_name("a_b_c_d_e.JPG").is_none());
        assert!(parse_image_name("plain.JPG").is_none());
    }

    #[test]
    fn test_image_for_match() {
        let image = catalog().image_for(Some("Br"), Some("C1"));
        assert_eq!(image.src, "/static/Edgecombe_Tarboro_Br_C1.JPG");
        assert!(image.matched);
    }

    #[test]
    fn test_image_for_fallback() {
        let catalog = catalog();
        for (park, camera) in [(Some("Br"), Some("C9")), (None, None), (Some("Br"), None)] {
            let image = catalog.image_for(park, camera);
            assert_eq!(image.src, "/static/default_image.JPG");
            assert!(!image.matched);
        }
    }

    #[test]
    fn test_resolve_allow_list() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolve("default_image.JPG").unwrap(),
            Path::new("resources").join("default_image.JPG")
        );
        let err = catalog.resolve("../secrets.JPG").unwrap_err();
        assert!(matches!(err, ImageError::NotAllowed(_)));
        assert!(err.to_string().contains("excluded from the allowed static files"));
    }

    #[test]
    fn test_scan_filters_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Co_Ci_Ga_C1.JPG"), b"jpeg").unwrap();
        std::fs::write(dir.path().join("Co_Ci_Ga_C2.jpg"), b"jpeg").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"text").unwrap();
        std::fs::create_dir(dir.path().join("nested.JPG")).unwrap();

        let catalog = ImageCatalog::scan(&settings(dir.path())).unwrap();
        assert_eq!(catalog.files(), &["Co_Ci_Ga_C1.JPG".to_string()]);
    }

    #[test]
    fn test_scan_missing_directory_is_empty() {
        let catalog = ImageCatalog::scan(&settings(Path::new("/no/such/images"))).unwrap();
        assert!(catalog.files().is_empty());
    }

    #[tokio::test]
    async fn test_read_allowed_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Co_Ci_Ga_C1.JPG"), b"jpeg-bytes").unwrap();
        let catalog = ImageCatalog::scan(&settings(dir.path())).unwrap();
        assert_eq!(catalog.read("Co_Ci_Ga_C1.JPG").await.unwrap(), b"jpeg-bytes");
        assert!(catalog.read("other.JPG").await.is_err());
    }
}
