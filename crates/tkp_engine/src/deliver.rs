use std::path::PathBuf;

use tkp_logging::tkp_info;

use crate::{AtomicFileWriter, DeliveryError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Saved(PathBuf),
    /// The user declined to pick a location.
    Cancelled,
}

/// Where finished documents go.
#[async_trait::async_trait]
pub trait DownloadSink: Send + Sync {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> Result<Delivery, DeliveryError>;
}

/// Saves every document into one directory without asking.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

#[async_trait::async_trait]
impl DownloadSink for DirectorySink {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> Result<Delivery, DeliveryError> {
        let path = write_document(self.dir.join(file_name), bytes).await?;
        Ok(Delivery::Saved(path))
    }
}

/// Atomically write `bytes` to `path` on the blocking pool.
pub async fn write_document(path: PathBuf, bytes: Vec<u8>) -> Result<PathBuf, DeliveryError> {
    let dir = path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let written = tokio::task::spawn_blocking(move || {
        AtomicFileWriter::new(dir).write(&file_name, &bytes)
    })
    .await
    .map_err(|err| DeliveryError::Join(err.to_string()))??;

    tkp_info!("Saved document to {:?}", written);
    Ok(written)
}
