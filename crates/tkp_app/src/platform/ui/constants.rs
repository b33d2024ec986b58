pub const WINDOW_TITLE: &str = "Авто-ТКП";
pub const WINDOW_SIZE: (f32, f32) = (640.0, 600.0);

pub const HEADING: &str = "Авто-ТКП";
pub const SUBTITLE: &str = "Интеллектуальный генератор коммерческих предложений";
pub const INPUT_LABEL: &str = "Введите запрос клиента";
pub const INPUT_PLACEHOLDER: &str = "Например: лоток 6000х200х100, 10 метров...";

pub const SAVE_DIALOG_TITLE: &str = "Сохранить ТКП";
pub const DOCX_FILTER_NAME: &str = "Документ Word";

pub const CARD_WIDTH: f32 = 560.0;
pub const INPUT_HEIGHT: f32 = 140.0;
pub const PAD_MD: u16 = 8;
pub const PAD_LG: u16 = 24;
pub const SPACE_MD: u16 = 12;
