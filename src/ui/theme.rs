use ratatui::style::Color;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const DUCKBONES: Color = Color::Rgb(0x15, 0x19, 0x26);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Modal/Overlay backgrounds
    pub const MODAL_BG: Color = Palette::DUCKBONES;
    pub const SCRIM_BG: Color = Color::Rgb(0x10, 0x10, 0x16);

    pub const TEXT_ACCENT: Color = Color::Cyan;
    pub const TEXT_MUTED: Color = Color::DarkGray;

    pub const STATUS_SUCCESS: Color = Color::Green;
    pub const STATUS_ERROR: Color = Color::Red;

    /// Confirm button color for danger-priority dialogs.
    pub const DANGER: Color = Color::Red;
    pub const PRIMARY: Color = Color::Blue;

    pub const SELECTED_BG: Color = Color::Rgb(0x2a, 0x2a, 0x2e);
}
