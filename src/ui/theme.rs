use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub hint: Style,
    pub label: Style,
    pub field: Style,
    pub field_selected: Style,
    pub placeholder: Style,
    pub border: Style,
    pub preview: Style,
    pub key: Style,
    pub key_control: Style,
    pub key_highlighted: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().color(Color::Cyan).bold(),
            hint: Style::new().color(Color::DarkGrey),
            label: Style::new().bold(),
            field: Style::new().color(Color::White),
            field_selected: Style::new().color(Color::Black).background(Color::Cyan),
            placeholder: Style::new().color(Color::DarkGrey),
            border: Style::new().color(Color::Green),
            preview: Style::new().color(Color::Yellow).bold(),
            key: Style::new().color(Color::White),
            key_control: Style::new().color(Color::Magenta).bold(),
            key_highlighted: Style::new()
                .color(Color::White)
                .background(Color::Blue)
                .bold(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
