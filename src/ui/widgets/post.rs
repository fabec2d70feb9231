use crate::engagement::PostEngagementState;
use crate::feeds::Post;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

const LIKE_ON: &str = "♥";
const LIKE_OFF: &str = "♡";
const RETWEET: &str = "⟲";

/// Lines for one post card: header, avatar, wrapped content, engagement bar.
pub fn post_lines(post: &Post, state: &PostEngagementState, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                post.display_username().to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!("{} · {}", post.display_handle(), post.display_timestamp()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            format!("avatar {}", post.display_avatar()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let wrap_width = usize::from(width.max(10));
    for line in textwrap::wrap(&post.content, wrap_width) {
        lines.push(Line::from(line.into_owned()));
    }

    lines.push(engagement_line(state));
    lines.push(Line::from(""));
    lines
}

pub fn engagement_line(state: &PostEngagementState) -> Line<'static> {
    let like_style = if state.liked() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let retweet_style = if state.retweeted() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let like_icon = if state.liked() { LIKE_ON } else { LIKE_OFF };

    Line::from(vec![
        Span::styled(format!("{} {}", like_icon, state.like_count()), like_style),
        Span::raw("    "),
        Span::styled(format!("{} {}", RETWEET, state.retweet_count()), retweet_style),
    ])
}

pub fn post_item(post: &Post, state: &PostEngagementState, width: u16) -> ListItem<'static> {
    ListItem::new(post_lines(post, state, width))
}
