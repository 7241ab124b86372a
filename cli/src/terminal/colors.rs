use colored::Color;
use hexwatch_common::network::status::Status;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 200, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ENDPOINT: Color = Color::TrueColor { r: 180, g: 180, b: 255 };

pub fn status(status: Status) -> Color {
    match status {
        Status::Unreachable => Color::Red,
        Status::PortClosed => Color::Blue,
        Status::Healthy => Color::Green,
    }
}
