use ratatui::style::{Color, Modifier, Style};

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;
pub const GRABBED_FG: Color = Color::Yellow;
pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const MERGED_BADGE: Color = Color::Magenta;
pub const POPUP_BG: Color = Color::Black;
pub const STATUS_TEXT: Color = Color::Green;
pub const DISABLED_TEXT: Color = Color::DarkGray;

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_row() -> Style {
    Style::default().bg(SELECTED_BG).fg(NORMAL_TEXT)
}

pub fn grabbed_row() -> Style {
    Style::default()
        .fg(GRABBED_FG)
        .add_modifier(Modifier::BOLD)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
