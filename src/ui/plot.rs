//! Full-screen scatter plot of token length against frequency.
//!
//! The chart is drawn once per terminal event; `q`, `Esc` or `Ctrl-C`
//! closes it and restores the terminal.

use crate::stats::TokenRow;
use crate::ui::styles::PlotStyles;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};
use std::io;

/// One `(length, frequency)` point per table row.
pub fn scatter_points(rows: &[TokenRow]) -> Vec<(f64, f64)> {
    rows.iter()
        .map(|r| (r.length as f64, r.frequency as f64))
        .collect()
}

/// X and Y bounds covering every point with one unit of margin, never
/// below zero. An empty plot gets unit bounds.
pub fn axis_bounds(points: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    if points.is_empty() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }
    let (mut x_min, mut x_max) = (f64::MAX, f64::MIN);
    let (mut y_min, mut y_max) = (f64::MAX, f64::MIN);
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    (
        [(x_min - 1.0).max(0.0), x_max + 1.0],
        [(y_min - 1.0).max(0.0), y_max + 1.0],
    )
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Span::raw(format!("{:.0}", v)))
        .collect()
}

/// Draw the chart into the whole frame.
pub fn draw_chart(f: &mut Frame<'_>, points: &[(f64, f64)], title: &str, styles: &PlotStyles) {
    let (x_bounds, y_bounds) = axis_bounds(points);
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Scatter)
        .style(styles.points)
        .data(points);
    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title.to_string(), styles.title)),
        )
        .x_axis(
            Axis::default()
                .title("Length")
                .style(styles.axis)
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("Frequency")
                .style(styles.axis)
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );
    f.render_widget(chart, f.area());
}

/// Show the length/frequency scatter plot until the user closes it.
pub fn render_scatter(
    rows: &[TokenRow],
    title: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let points = scatter_points(rows);
    let styles = PlotStyles::default();
    tracing::debug!(points = points.len(), title, "Rendering scatter plot");

    enable_raw_mode()?;
    let _restore = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_until_closed(&mut terminal, &points, title, &styles);
    terminal.show_cursor()?;
    result.map_err(Into::into)
}

/// Runs `restore` when dropped, so every exit path after raw mode was
/// enabled leaves the terminal usable.
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        tracing::warn!(error = %e, "Failed to leave alternate screen");
    }
}

fn run_until_closed<B: Backend>(
    terminal: &mut Terminal<B>,
    points: &[(f64, f64)],
    title: &str,
    styles: &PlotStyles,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw_chart(f, points, title, styles))?;
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                _ => {}
            }
        }
    }
}
