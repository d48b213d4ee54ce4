use ratatui::style;

pub struct PlotStyles {
    pub points: style::Style,
    pub axis: style::Style,
    pub title: style::Style,
}

impl Default for PlotStyles {
    fn default() -> Self {
        Self {
            points: style::Style::default().fg(style::Color::Green),
            axis: style::Style::default()
                .add_modifier(style::Modifier::DIM),
            title: style::Style::default()
                .fg(style::Color::Green)
                .add_modifier(style::Modifier::BOLD),
        }
    }
}
