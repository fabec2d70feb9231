pub mod left_sidebar;
pub mod pages;
pub mod post;
pub mod prompt;
pub mod right_sidebar;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};

pub fn panel(title: &str, active: bool) -> Block<'static> {
    let border_style = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", title))
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// Flatten a rendered buffer into newline-separated rows.
    pub fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}
