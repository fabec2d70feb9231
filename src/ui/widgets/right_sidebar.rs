use crate::app::App;
use crate::ui::widgets::panel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEYS: [(&str, &str); 7] = [
    ("1-4", "switch page"),
    (":", "go to path"),
    ("b", "back"),
    ("j/k", "select post"),
    ("l", "like"),
    ("r", "retweet"),
    ("q", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(KEYS.len() as u16 + 2)])
        .split(area);

    let trends_block = panel("What's happening", false);
    let mut lines = Vec::new();
    for trend in &app.config().trends {
        lines.push(Line::from(Span::styled(
            format!("#{}", trend.topic),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        if let Some(posts) = &trend.posts {
            lines.push(Line::from(Span::styled(
                format!("{} posts", posts),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines).block(trends_block), chunks[0]);

    let keys: Vec<Line> = KEYS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:>4} ", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(keys).block(panel("Keys", false)), chunks[1]);
}
