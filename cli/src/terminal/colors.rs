use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 129, g: 199, b: 132 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 202, b: 40 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };
pub const PROFILE: Color = Color::TrueColor { r: 100, g: 181, b: 246 };
pub const ERROR: Color = Color::TrueColor { r: 239, g: 83, b: 80 };
