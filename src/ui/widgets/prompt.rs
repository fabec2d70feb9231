use crate::layout::center_rect;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Path entry popup over `area`.
pub fn render(frame: &mut Frame, area: Rect, input: &str) {
    let modal_area = center_rect(80, 30, area);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title("Go to path");

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let text = vec![
        Line::from(format!("{}█", input)),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to go | Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(text), inner);
}

/// One-line message on the last row inside `area`'s border.
pub fn render_status(frame: &mut Frame, area: Rect, message: &str) {
    if area.height < 3 || area.width < 3 {
        return;
    }
    let line_area = Rect::new(area.x + 1, area.bottom() - 2, area.width - 2, 1);

    let line = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Clear, line_area);
    frame.render_widget(Paragraph::new(line), line_area);
}
