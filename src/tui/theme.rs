use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(20, 18, 28);
pub const SURFACE: Color = Color::Rgb(30, 27, 42);
pub const BORDER: Color = Color::Rgb(62, 56, 84);
pub const TEXT: Color = Color::Rgb(226, 222, 240);
pub const TEXT_DIM: Color = Color::Rgb(128, 122, 150);
pub const LAVENDER: Color = Color::Rgb(167, 139, 250);
pub const TEAL: Color = Color::Rgb(94, 176, 170);
pub const GREEN: Color = Color::Rgb(110, 170, 100);
pub const AMBER: Color = Color::Rgb(214, 160, 74);
pub const ROSE: Color = Color::Rgb(200, 96, 110);
pub const BLUE: Color = Color::Rgb(96, 126, 200);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn accent() -> Style {
    Style::default().fg(LAVENDER)
}

pub fn teal() -> Style {
    Style::default().fg(TEAL)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Colour for a mood score; unrated (0) is dim.
pub fn mood(score: i32) -> Style {
    let color = match score {
        5 => GREEN,
        4 => TEAL,
        3 => AMBER,
        2 => BLUE,
        1 => ROSE,
        _ => TEXT_DIM,
    };
    Style::default().fg(color)
}
