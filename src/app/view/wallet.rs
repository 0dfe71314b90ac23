use iced::widget::{column, row, rule, text};
use iced::{Element, Length};

use crate::app::{Message, State};

pub fn view_wallet(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let rows = state.wallet.cached_rows().unwrap_or_default();

    let header = row![
        text("Currency").size(12).color(theme.fg_muted).width(Length::FillPortion(2)),
        text("Blockchain").size(12).color(theme.fg_muted).width(Length::FillPortion(3)),
        text("Amount").size(12).color(theme.fg_muted).width(Length::FillPortion(2)),
        text("USD").size(12).color(theme.fg_muted).width(Length::FillPortion(2)),
    ];

    let lines = column(rows.iter().map(|r| {
        row![
            text(r.balance.currency().to_string()).size(14).width(Length::FillPortion(2)),
            text(r.balance.entry.blockchain.clone())
                .size(14)
                .color(theme.fg_secondary)
                .width(Length::FillPortion(3)),
            text(r.balance.formatted_amount.clone()).size(14).width(Length::FillPortion(2)),
            text(r.usd_display()).size(14).width(Length::FillPortion(2)),
        ]
        .into()
    }))
    .spacing(8);

    let total: rust_decimal::Decimal = rows.iter().filter_map(|r| r.usd_value).sum();
    let mut content = column![header, rule::horizontal(1), lines].spacing(10);

    if rows.is_empty() {
        content = content.push(text("No balances to show").size(13).color(theme.fg_muted));
    } else {
        content = content.push(
            text(format!("Total: ${}", tokswap::core::convert::round_money(total)))
                .size(15)
                .color(theme.success),
        );
    }
    if let Some(error) = &state.wallet_error {
        content = content.push(text(error.as_str()).size(12).color(theme.danger));
    }

    content.into()
}
