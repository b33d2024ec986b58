use iced::widget::{button, center, column, container, text, text_editor, Column};
use iced::alignment::Horizontal;
use iced::{Element, Length};
use tkp_core::{Banner, BannerKind, Msg, PanelViewModel};

use super::constants::*;
use super::style;
use crate::platform::app::Message;

pub fn render<'a>(view: &'a PanelViewModel, editor: &'a text_editor::Content) -> Element<'a, Message> {
    let input = column![
        text(INPUT_LABEL).size(14),
        text_editor(editor)
            .placeholder(INPUT_PLACEHOLDER)
            .on_action(Message::Editor)
            .height(Length::Fixed(INPUT_HEIGHT)),
    ]
    .spacing(PAD_MD);

    let mut card: Column<'a, Message> = column![
        text(HEADING).size(28),
        text(SUBTITLE).size(14).style(style::text_muted),
        input,
    ]
    .spacing(SPACE_MD);

    if let Some(banner) = &view.banner {
        card = card.push(banner_box(banner));
    }

    let label = text(view.submit_label)
        .align_x(Horizontal::Center)
        .width(Length::Fill);
    // Disabled while a request is in flight.
    let submit = button(label)
        .on_press_maybe(
            view.submit_enabled
                .then_some(Message::Panel(Msg::SubmitClicked)),
        )
        .style(style::rounded_button_primary)
        .padding([10, 16])
        .width(Length::Fill);
    card = card.push(submit);

    center(
        container(card)
            .style(style::card)
            .padding(PAD_LG)
            .max_width(CARD_WIDTH),
    )
    .padding(PAD_LG)
    .into()
}

fn banner_box(banner: &Banner) -> Element<'_, Message> {
    let banner_style = match banner.kind {
        BannerKind::Error => style::error_box,
        BannerKind::Success => style::success_box,
    };

    container(text(&banner.text).size(14))
        .style(banner_style)
        .padding([PAD_MD, PAD_MD + 4])
        .width(Length::Fill)
        .into()
}
