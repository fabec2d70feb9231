use crate::app::App;
use crate::routing::Page;
use crate::ui::widgets::panel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel("xfeed", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    let active = app.center().page();
    let items: Vec<ListItem> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let is_active = active == Some(*page);
            let style = if is_active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if is_active { "▶ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(page.label(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), chunks[0]);

    let profile = &app.config().profile;
    let footer = vec![
        Line::from(Span::styled(
            profile.username.clone().unwrap_or_else(|| "Guest".to_string()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.handle.clone().unwrap_or_default(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            app.current_path().to_string(),
            Style::default().fg(Color::Yellow),
        )),
    ];
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::widgets::test_support::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_highlights_active_page() {
        let mut app = App::new(Config::default());
        app.navigate("/explore/trending");

        let mut terminal = Terminal::new(TestBackend::new(24, 12)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, area, &app)
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("▶ 2 Explore"));
        assert!(text.contains("  1 Home"));
        assert!(text.contains("/explore/trending"));
    }
}
