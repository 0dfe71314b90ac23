//! Searchable currency picker

use crate::app::ui_components::{
    dropdown_container, list_item_button, secondary_button, themed_text_input,
};
use crate::app::{Message, State};
use iced::widget::{button, column, container, mouse_area, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};
use tokswap::core::selection::PickerView;
use tokswap::core::swap::Side;

const LIST_HEIGHT: f32 = 220.0;

/// The trigger plus, while open, the search box and visible candidates.
///
/// The whole block is one hover region, so presses on the trigger or inside
/// the list never count as outside presses.
pub fn view_picker(state: &State, side: Side) -> Element<'_, Message> {
    let theme = &state.theme;
    let picker = state.picker(side);
    let slot = state.form.slot(side);

    let trigger = button(
        row![
            text(slot.selected()).size(14).width(Length::Fill),
            text(if picker.is_open() { "▴" } else { "▾" })
                .size(12)
                .color(theme.fg_muted),
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([8, 12])
    .on_press(Message::PickerToggled(side))
    .style(move |_, status| secondary_button(theme, status));

    let dropdown: Option<PickerView<Element<'_, Message>>> = picker.compose(
        slot.visible(),
        move |query| {
            text_input("Search...", query)
                .on_input(move |q| Message::PickerSearchChanged(side, q))
                .padding(8)
                .size(13)
                .style(move |_, status| themed_text_input(theme, status))
                .into()
        },
        move |_, item, highlighted| {
            button(text(item.label.as_str()).size(13))
                .width(Length::Fill)
                .padding([6, 10])
                .on_press(Message::PickerItemSelected(side, item.key.clone()))
                .style(move |_, status| list_item_button(theme, status, highlighted))
                .into()
        },
    );

    let mut content = column![
        text(side.to_string()).size(12).color(theme.fg_secondary),
        trigger,
    ]
    .spacing(6);

    if let Some(view) = dropdown {
        let list: Element<'_, Message> = if view.items.is_empty() {
            text("No matches").size(12).color(theme.fg_muted).into()
        } else {
            scrollable(column(view.items).spacing(2))
                .height(Length::Fixed(LIST_HEIGHT))
                .into()
        };
        content = content.push(
            container(column![view.search, list].spacing(6))
                .padding(8)
                .width(Length::Fill)
                .style(move |_| dropdown_container(theme)),
        );
    }

    mouse_area(content)
        .on_enter(Message::PickerHovered(side, true))
        .on_exit(Message::PickerHovered(side, false))
        .into()
}
