pub const SUBMIT_LABEL: &str = "Сгенерировать и скачать (.docx)";
pub const SUBMITTING_LABEL: &str = "Генерация...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelViewModel {
    pub query: String,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub banner: Option<Banner>,
    pub dirty: bool,
}
