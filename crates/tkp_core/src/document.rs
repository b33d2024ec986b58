/// Content type of the generated commercial proposal.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const DOCX_EXTENSION: &str = "docx";

/// File name offered for a proposal received at `epoch_millis`: `ТКП_{epoch_millis}.docx`.
pub fn document_file_name(epoch_millis: u64) -> String {
    format!("ТКП_{epoch_millis}.{DOCX_EXTENSION}")
}
