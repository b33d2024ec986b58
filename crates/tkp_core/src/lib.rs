//! Auto-TKP core: pure request-panel state machine and view-model helpers.
mod document;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use document::{document_file_name, DOCX_EXTENSION, DOCX_MIME_TYPE};
pub use effect::{DocumentDownload, Effect};
pub use msg::Msg;
pub use state::{
    failure_message, AttemptId, PanelState, RequestState, DEFAULT_QUERY, ERROR_PREFIX,
    SUCCESS_MESSAGE, VALIDATION_MESSAGE,
};
pub use update::update;
pub use view_model::{Banner, BannerKind, PanelViewModel, SUBMITTING_LABEL, SUBMIT_LABEL};
