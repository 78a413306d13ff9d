//! Filesystem output destination implementation

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;

use crate::{
    destination::{DeliveryResult, ExportFile, OutputDestination},
    errors::{DeliveryError, ValidationError},
};

/// Configuration for filesystem destination
#[derive(Debug, Clone)]
pub struct FilesystemConfig {
    pub output_dir: PathBuf,
    pub create_dirs: bool,
    pub overwrite: bool,
}

impl FilesystemConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            create_dirs: true,
            overwrite: true,
        }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }
}

/// Writes export files into a directory
#[derive(Debug, Clone)]
pub struct FilesystemDestination {
    config: FilesystemConfig,
}

impl FilesystemDestination {
    pub fn new(config: FilesystemConfig) -> Self {
        Self { config }
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// Reject names that could escape the output directory
    fn validate_filename(filename: &str) -> Result<(), DeliveryError> {
        let invalid = filename.is_empty()
            || filename.contains('\0')
            || filename.contains('/')
            || filename.contains('\\')
            || filename == "."
            || filename == "..";

        if invalid {
            return Err(DeliveryError::InvalidFilename {
                filename: filename.to_string(),
            });
        }
        Ok(())
    }

    async fn write_file(&self, path: &Path, content: &[u8]) -> Result<(), DeliveryError> {
        let display = path.display().to_string();

        if self.config.create_dirs {
            fs::create_dir_all(&self.config.output_dir)
                .await
                .map_err(|e| DeliveryError::Filesystem {
                    path: self.config.output_dir.display().to_string(),
                    operation: "create_dir".to_string(),
                    error: e.to_string(),
                })?;
        }

        if !self.config.overwrite && fs::try_exists(path).await.unwrap_or(false) {
            return Err(DeliveryError::FileExists { path: display });
        }

        fs::write(path, content).await.map_err(|e| DeliveryError::Filesystem {
            path: display,
            operation: "write".to_string(),
            error: e.to_string(),
        })
    }
}

#[async_trait]
impl OutputDestination for FilesystemDestination {
    async fn deliver(&self, file: &ExportFile) -> Result<DeliveryResult, DeliveryError> {
        let start = Instant::now();
        Self::validate_filename(&file.filename)?;

        let path = self.config.output_dir.join(&file.filename);
        self.write_file(&path, file.content.as_bytes()).await?;

        let location = path.display().to_string();
        tracing::info!(path = %location, size_bytes = file.size_bytes(), "Export written");

        Ok(DeliveryResult::success(
            self.destination_type(),
            start.elapsed(),
            file.size_bytes(),
            Some(location),
        ))
    }

    fn validate_config(&self) -> Result<(), ValidationError> {
        let dir = &self.config.output_dir;
        if dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyPath);
        }
        if dir.exists() && !dir.is_dir() {
            return Err(ValidationError::NotADirectory(dir.display().to_string()));
        }
        Ok(())
    }

    fn destination_type(&self) -> &'static str {
        "filesystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_writes_into_nested_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("exports");
        let destination = FilesystemDestination::new(FilesystemConfig::new(&dir));

        let result = destination
            .deliver(&ExportFile::csv("reports-2024-01-15.csv", "\"a\"\n\"1\""))
            .await
            .unwrap();

        assert_eq!(result.size_bytes, 7);
        assert_eq!(result.destination_type, "filesystem");
        let written = std::fs::read_to_string(dir.join("reports-2024-01-15.csv")).unwrap();
        assert_eq!(written, "\"a\"\n\"1\"");
    }

    #[tokio::test]
    async fn test_no_overwrite_rejects_existing_file() {
        let temp = TempDir::new().unwrap();
        let config = FilesystemConfig::new(temp.path()).with_overwrite(false);
        let destination = FilesystemDestination::new(config);
        let file = ExportFile::csv("reports.csv", "\"a\"");

        destination.deliver(&file).await.unwrap();
        let err = destination.deliver(&file).await.unwrap_err();
        assert!(matches!(err, DeliveryError::FileExists { .. }));
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let temp = TempDir::new().unwrap();
        let destination = FilesystemDestination::new(FilesystemConfig::new(temp.path()));

        for name in ["../escape.csv", "a\0b.csv", ""] {
            let err = destination.deliver(&ExportFile::csv(name, "x")).await.unwrap_err();
            assert!(matches!(err, DeliveryError::InvalidFilename { .. }), "{name:?}");
        }
    }

    #[test]
    fn test_validate_config() {
        let destination = FilesystemDestination::new(FilesystemConfig::new(""));
        assert_eq!(destination.validate_config(), Err(ValidationError::EmptyPath));

        let file = tempfile::NamedTempFile::new().unwrap();
        let destination = FilesystemDestination::new(FilesystemConfig::new(file.path()));
        assert!(matches!(destination.validate_config(), Err(ValidationError::NotADirectory(_))));
    }
}
