use crate::{document_file_name, AttemptId, DOCX_MIME_TYPE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call the external generator with the query exactly as typed.
    Generate { attempt: AttemptId, query: String },
    /// Hand a finished document to the user.
    Download(DocumentDownload),
}

/// A generated document ready to be saved. Owned only by the effect carrying it.
#[derive(Clone, PartialEq, Eq)]
pub struct DocumentDownload {
    pub attempt: AttemptId,
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl DocumentDownload {
    pub fn new(attempt: AttemptId, received_at_ms: u64, bytes: Vec<u8>) -> Self {
        Self {
            attempt,
            file_name: document_file_name(received_at_ms),
            mime_type: DOCX_MIME_TYPE,
            bytes,
        }
    }
}

// Documents can be large; keep debug output to the metadata.
impl std::fmt::Debug for DocumentDownload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentDownload")
            .field("attempt", &self.attempt)
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
