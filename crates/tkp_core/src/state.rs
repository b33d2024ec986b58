use crate::view_model::{Banner, BannerKind, PanelViewModel, SUBMITTING_LABEL, SUBMIT_LABEL};

pub type AttemptId = u64;

/// Shown when the user submits a blank request.
pub const VALIDATION_MESSAGE: &str = "Пожалуйста, введите запрос клиента.";
/// Shown after a document has been generated and handed off for download.
pub const SUCCESS_MESSAGE: &str =
    "ТКП успешно сгенерировано! Файл .docx скачивается, лог-файл .json сохранен рядом с приложением.";
pub const ERROR_PREFIX: &str = "Ошибка: ";
/// Sample request the panel starts with.
pub const DEFAULT_QUERY: &str = "Лоток перфорированный 100х100, 12 метров, и 10 гаек М10";

/// Banner text for a failed generation or delivery.
pub fn failure_message(error: &str) -> String {
    format!("{ERROR_PREFIX}{error}")
}

/// Progress of the most recent submission. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Submitting {
        attempt: AttemptId,
    },
    Succeeded {
        attempt: AttemptId,
    },
    Failed {
        message: String,
    },
}

impl RequestState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, RequestState::Submitting { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelState {
    query: String,
    request: RequestState,
    last_attempt: AttemptId,
    dirty: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn view(&self) -> PanelViewModel {
        let submitting = self.request.is_submitting();
        let banner = match &self.request {
            RequestState::Failed { message } => Some(Banner {
                kind: BannerKind::Error,
                text: message.clone(),
            }),
            RequestState::Succeeded { .. } => Some(Banner {
                kind: BannerKind::Success,
                text: SUCCESS_MESSAGE.to_string(),
            }),
            RequestState::Idle | RequestState::Submitting { .. } => None,
        };

        PanelViewModel {
            query: self.query.clone(),
            submit_enabled: !submitting,
            submit_label: if submitting {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            banner,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.query = query;
        self.dirty = true;
    }

    /// Starts a new attempt and moves to `Submitting`, dropping any previous banner.
    pub(crate) fn begin_attempt(&mut self) -> AttemptId {
        self.last_attempt += 1;
        self.request = RequestState::Submitting {
            attempt: self.last_attempt,
        };
        self.dirty = true;
        self.last_attempt
    }

    pub(crate) fn is_in_flight(&self, attempt: AttemptId) -> bool {
        self.request == RequestState::Submitting { attempt }
    }

    pub(crate) fn has_succeeded(&self, attempt: AttemptId) -> bool {
        self.request == RequestState::Succeeded { attempt }
    }

    pub(crate) fn succeed(&mut self, attempt: AttemptId) {
        self.request = RequestState::Succeeded { attempt };
        self.dirty = true;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.request = RequestState::Failed { message };
        self.dirty = true;
    }
}
