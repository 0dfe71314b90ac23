use crate::app::theme::AppTheme;
use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Vector};

pub fn main_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_base.into()),
        text_color: Some(theme.fg_primary),
        ..Default::default()
    }
}

pub fn card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_surface.into()),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Floating list under an open picker
pub fn dropdown_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_elevated.into()),
        border: Border {
            color: theme.border_strong,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

pub fn primary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.accent.into()),
        text_color: theme.fg_on_accent,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(
                Color {
                    r: (theme.accent.r * 1.08).min(1.0),
                    g: (theme.accent.g * 1.08).min(1.0),
                    b: (theme.accent.b * 1.08).min(1.0),
                    ..theme.accent
                }
                .into(),
            ),
            ..base
        },
        button::Status::Pressed => button::Style {
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 0.5),
                blur_radius: 1.5,
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Color { a: 0.5, ..theme.accent }.into()),
            text_color: Color {
                a: 0.5,
                ..theme.fg_on_accent
            },
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Active => base,
    }
}

/// The closed picker's trigger
pub fn secondary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.bg_elevated.into()),
        text_color: theme.fg_primary,
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(theme.bg_hover.into()),
            border: Border {
                color: theme.border_strong,
                ..base.border
            },
            ..base
        },
        button::Status::Active | button::Status::Disabled => base,
    }
}

pub fn tab_button(theme: &AppTheme, status: button::Status, active: bool) -> button::Style {
    let base = button::Style {
        background: active.then(|| theme.bg_elevated.into()),
        text_color: if active {
            theme.fg_primary
        } else {
            theme.fg_secondary
        },
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(theme.bg_hover.into()),
            ..base
        },
        _ => base,
    }
}

/// One row in an open picker; highlighted rows use the active background.
pub fn list_item_button(
    theme: &AppTheme,
    status: button::Status,
    highlighted: bool,
) -> button::Style {
    let background = match status {
        _ if highlighted => Some(theme.bg_active.into()),
        button::Status::Hovered | button::Status::Pressed => Some(theme.bg_hover.into()),
        _ => None,
    };
    button::Style {
        background,
        text_color: theme.fg_primary,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Text input styling with theme-aware colors
pub fn themed_text_input(theme: &AppTheme, status: text_input::Status) -> text_input::Style {
    let base = text_input::Style {
        background: theme.bg_elevated.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        icon: theme.fg_muted,
        placeholder: theme.fg_muted,
        value: theme.fg_primary,
        selection: theme.accent,
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: theme.border_strong,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                color: theme.accent,
                width: 2.0,
                radius: 4.0.into(),
            },
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            value: theme.fg_muted,
            ..base
        },
    }
}
