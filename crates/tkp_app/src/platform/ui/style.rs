use iced::widget::{button, container, text};
use iced::{border, Color, Theme};

pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: border::rounded(12),
        ..container::Style::default()
    }
}

pub fn error_box(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.danger.weak.color.into()),
        text_color: Some(palette.danger.weak.text),
        border: border::rounded(8),
        ..container::Style::default()
    }
}

pub fn success_box(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.success.weak.color.into()),
        text_color: Some(palette.success.weak.text),
        border: border::rounded(8),
        ..container::Style::default()
    }
}

pub fn rounded_button_primary(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        border: border::rounded(8),
        ..button::primary(theme, status)
    }
}

pub fn text_muted(theme: &Theme) -> text::Style {
    let base = theme.extended_palette().background.base.text;

    text::Style {
        color: Some(Color { a: 0.6, ..base }),
    }
}
