use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the request text box.
    QueryChanged(String),
    /// User clicked the generate button.
    SubmitClicked,
    /// The generator answered with a decoded document.
    GenerationSucceeded {
        attempt: crate::AttemptId,
        document: Vec<u8>,
        received_at_ms: u64,
    },
    /// The generator call failed; `error` is the error's display text.
    GenerationFailed {
        attempt: crate::AttemptId,
        error: String,
    },
    /// The document was written to disk.
    DownloadSaved {
        attempt: crate::AttemptId,
        path: PathBuf,
    },
    /// Writing the document failed.
    DownloadFailed {
        attempt: crate::AttemptId,
        error: String,
    },
    /// User dismissed the save dialog.
    DownloadCancelled { attempt: crate::AttemptId },
}
