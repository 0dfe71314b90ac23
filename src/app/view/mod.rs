//! UI rendering module for tokswap
//!
//! Split into one submodule per tab plus the shared picker widget.

mod converter;
mod picker;
mod wallet;

use crate::app::ui_components::{card_container, main_container, tab_button};
use crate::app::{FeedStatus, Message, State, Tab};
use iced::widget::{button, column, container, row, space, text};
use iced::{Alignment, Element, Length};
use strum::IntoEnumIterator;
use tokswap::utils::truncate_string;

/// Main view entry point
pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let tabs = row(Tab::iter().map(|tab| {
        let active = tab == state.active_tab;
        button(text(tab.to_string()).size(14))
            .padding([6, 14])
            .on_press(Message::TabSelected(tab))
            .style(move |_, status| tab_button(theme, status, active))
            .into()
    }))
    .spacing(4);

    let header = row![
        tabs,
        space().width(Length::Fill),
        view_feed_status(state),
        button(text("Refresh").size(13))
            .padding([6, 12])
            .on_press_maybe((state.feed != FeedStatus::Loading).then_some(Message::RefreshPrices))
            .style(move |_, status| tab_button(theme, status, false)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = match state.active_tab {
        Tab::Converter => converter::view_converter(state),
        Tab::Wallet => wallet::view_wallet(state),
    };

    container(
        column![
            header,
            container(body)
                .padding(20)
                .width(Length::Fill)
                .style(move |_| card_container(theme)),
        ]
        .spacing(16)
        .max_width(560),
    )
    .padding(24)
    .center_x(Length::Fill)
    .height(Length::Fill)
    .style(move |_| main_container(theme))
    .into()
}

fn view_feed_status(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    match &state.feed {
        FeedStatus::Idle => text("").into(),
        FeedStatus::Loading => text("Loading prices...")
            .size(12)
            .color(theme.fg_muted)
            .into(),
        FeedStatus::Ready => text(format!("{} prices", state.form.prices().get().len()))
            .size(12)
            .color(theme.fg_secondary)
            .into(),
        FeedStatus::Error(message) => text(truncate_string(message, 48))
            .size(12)
            .color(theme.danger)
            .into(),
    }
}
