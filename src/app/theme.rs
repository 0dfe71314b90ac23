use iced::Color;

/// Semantic color palette shared by all views.
#[derive(Debug, Clone)]
pub struct AppTheme {
    // === Background Layers (progressive depth) ===
    pub bg_base: Color,
    pub bg_surface: Color,
    pub bg_elevated: Color,
    pub bg_hover: Color,
    pub bg_active: Color,

    // === Foreground/Text ===
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,
    pub fg_on_accent: Color,

    // === Semantic Colors ===
    pub accent: Color,
    pub success: Color,
    pub danger: Color,

    // === Borders & Shadows ===
    pub border: Color,
    pub border_strong: Color,
    pub shadow_color: Color,
}

impl AppTheme {
    pub fn dark() -> Self {
        Self {
            bg_base: Color::from_rgb8(0x17, 0x19, 0x1d),
            bg_surface: Color::from_rgb8(0x21, 0x24, 0x2a),
            bg_elevated: Color::from_rgb8(0x2a, 0x2e, 0x35),
            bg_hover: Color::from_rgb8(0x33, 0x38, 0x41),
            bg_active: Color::from_rgb8(0x1f, 0x3a, 0x2b),
            fg_primary: Color::from_rgb8(0xe6, 0xe8, 0xeb),
            fg_secondary: Color::from_rgb8(0xa9, 0xb0, 0xba),
            fg_muted: Color::from_rgb8(0x6c, 0x74, 0x80),
            fg_on_accent: Color::WHITE,
            accent: Color::from_rgb8(0x16, 0xa3, 0x4a),
            success: Color::from_rgb8(0x4a, 0xde, 0x80),
            danger: Color::from_rgb8(0xef, 0x44, 0x44),
            border: Color::from_rgb8(0x3a, 0x3f, 0x47),
            border_strong: Color::from_rgb8(0x55, 0x5c, 0x67),
            shadow_color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::dark()
    }
}
