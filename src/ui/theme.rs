use ratatui::style::Color;

// Page backgrounds are pastel, so text stays dark.
pub const TEXT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const TEXT_MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const ACCENT: Color = Color::Rgb(0x1d, 0x4e, 0xd8);
pub const BUTTON_BG: Color = Color::Rgb(0x1d, 0x4e, 0xd8);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const INPUT_BG: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const INPUT_FOCUSED_BG: Color = Color::Rgb(0xfe, 0xf9, 0xc3);
