use tkp_core::DOCX_EXTENSION;
use tkp_engine::{write_document, Delivery, DeliveryError, DownloadSink};

use super::ui::constants::{DOCX_FILTER_NAME, SAVE_DIALOG_TITLE};

/// Asks the user where to put each document with the native save dialog.
pub struct DialogSink;

#[async_trait::async_trait]
impl DownloadSink for DialogSink {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> Result<Delivery, DeliveryError> {
        let picked = rfd::AsyncFileDialog::new()
            .set_title(SAVE_DIALOG_TITLE)
            .set_file_name(file_name)
            .add_filter(DOCX_FILTER_NAME, &[DOCX_EXTENSION])
            .save_file()
            .await;

        match picked {
            Some(handle) => {
                let path = write_document(handle.path().to_path_buf(), bytes).await?;
                Ok(Delivery::Saved(path))
            }
            None => Ok(Delivery::Cancelled),
        }
    }
}
