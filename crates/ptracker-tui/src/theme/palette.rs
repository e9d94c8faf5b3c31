//! Color palette for the dashboard.
//!
//! Status colors match the web tracker so a promise reads the same in both.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 12, 16);
pub const CARD_BG: Color = Color::Rgb(18, 21, 28);
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
pub const NAVBAR_BG: Color = Color::Rgb(14, 22, 38);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(45, 51, 59);
pub const BORDER_ACTIVE: Color = Color::Rgb(88, 166, 255);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(88, 166, 255);
pub const ACCENT_DIM: Color = Color::Rgb(56, 107, 163);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(201, 209, 217);
pub const TEXT_SECONDARY: Color = Color::Rgb(125, 133, 144);
pub const TEXT_MUTED: Color = Color::Rgb(72, 79, 88);
pub const TEXT_BRIGHT: Color = Color::Rgb(240, 246, 252);
/// Foreground on accent-colored backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Promise status ---
pub const STATUS_PROGRESSING: Color = Color::Rgb(0x99, 0xC3, 0xFF);
pub const STATUS_PROGRESSING_BORDER: Color = Color::Rgb(0x99, 0xC3, 0xFF);
pub const STATUS_COMPROMISED: Color = Color::Rgb(0xFF, 0xF0, 0xA2);
pub const STATUS_COMPROMISED_BORDER: Color = Color::Rgb(0xFF, 0xF0, 0xA2);
pub const STATUS_DELIVERED: Color = Color::Rgb(0xB7, 0xFF, 0xB5);
pub const STATUS_DELIVERED_BORDER: Color = Color::Rgb(0x7E, 0xD9, 0x57);
pub const STATUS_BROKEN: Color = Color::Rgb(0xFF, 0x9C, 0x9C);
pub const STATUS_BROKEN_BORDER: Color = Color::Rgb(0xDF, 0x04, 0x04);

// --- Notices ---
pub const NOTICE_ALERT: Color = Color::Rgb(234, 179, 8);
pub const NOTICE_ERROR: Color = Color::Rgb(244, 63, 94);
pub const NOTICE_INFO: Color = Color::Rgb(56, 189, 248);

// --- Category pills ---
pub const CATEGORY_BG: Color = Color::Rgb(45, 51, 59);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);
