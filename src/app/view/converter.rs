use super::picker::view_picker;
use crate::app::ui_components::{primary_button, themed_text_input};
use crate::app::{FeedStatus, Message, State};
use iced::widget::{button, column, text, text_input};
use iced::{Alignment, Element, Length};
use tokswap::core::swap::Side;

pub fn view_converter(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let loading = state.feed == FeedStatus::Loading;

    let amount = column![
        text("Amount").size(12).color(theme.fg_secondary),
        text_input("Enter amount", state.form.amount_input())
            .on_input_maybe((!loading).then_some(Message::AmountChanged))
            .on_submit(Message::SwapClicked)
            .padding(10)
            .size(14)
            .style(move |_, status| themed_text_input(theme, status)),
    ]
    .spacing(6);

    let mut content = column![
        view_picker(state, Side::From),
        view_picker(state, Side::To),
        amount
    ]
    .spacing(16);

    if let Some(message) = state.form.error_message() {
        content = content.push(text(message).size(13).color(theme.danger));
    }

    content = content.push(
        button(
            text(if loading { "Swapping..." } else { "Swap" })
                .size(15)
                .width(Length::Fill)
                .align_x(Alignment::Center),
        )
            .width(Length::Fill)
            .padding(12)
            .on_press_maybe((!loading).then_some(Message::SwapClicked))
            .style(move |_, status| primary_button(theme, status)),
    );

    if let Some(quote) = state.form.quote() {
        content = content.push(
            text(quote.to_string())
                .size(18)
                .color(theme.success)
                .width(Length::Fill)
                .align_x(Alignment::Center),
        );
    }

    content.into()
}
