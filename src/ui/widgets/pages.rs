use crate::app::{App, FeedStatus};
use crate::layout::Center;
use crate::routing::{self, Page};
use crate::ui::widgets::{panel, post};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render whatever the layout placed in the center region.
pub fn render(frame: &mut Frame, area: Rect, center: &Center, app: &App) {
    match center {
        Center::Page(Page::Home) => render_post_list(frame, area, "Home", app, "No posts yet"),
        Center::Page(Page::Explore) => render_explore(frame, area, app),
        Center::Page(Page::Notifications) => render_post_list(
            frame,
            area,
            "Notifications",
            app,
            "Nothing yet. Like or retweet a post and it shows up here.",
        ),
        Center::Page(Page::Profile) => render_profile(frame, area, app),
        Center::NotFound(path) => render_not_found(frame, area, path),
    }
}

fn render_post_list(frame: &mut Frame, area: Rect, title: &str, app: &App, empty: &str) {
    let block = panel(title, true);

    let message = match app.feed_status() {
        FeedStatus::Loading => Some("Loading...".to_string()),
        FeedStatus::Error(e) => Some(format!("Error: {}", e)),
        FeedStatus::Ready => None,
    };
    if let Some(message) = message {
        frame.render_widget(List::new(vec![ListItem::new(message)]).block(block), area);
        return;
    }

    let posts = app.visible_posts();
    if posts.is_empty() {
        let paragraph = Paragraph::new(empty.to_string())
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let width = block.inner(area).width.saturating_sub(2);
    let items: Vec<ListItem> = posts
        .iter()
        .map(|p| post::post_item(p, &app.engagement(p), width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("│ ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut state = app.list_state();
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_explore(frame: &mut Frame, area: Rect, app: &App) {
    let topic = routing::subpath("/explore/*", app.current_path()).unwrap_or("");

    let mut lines = vec![Line::from(Span::styled(
        if topic.is_empty() {
            "Explore".to_string()
        } else {
            format!("Explore: {}", topic)
        },
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(""));
    for trend in &app.config().trends {
        let style = if trend.topic.eq_ignore_ascii_case(topic) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(format!("#{}", trend.topic), style)));
    }

    frame.render_widget(Paragraph::new(lines).block(panel("Explore", true)), area);
}

fn render_profile(frame: &mut Frame, area: Rect, app: &App) {
    match app.profile_handle() {
        Some(handle) => {
            let title = format!("Profile {}", handle);
            render_post_list(frame, area, &title, app, "No posts from this account")
        }
        None => {
            let text = vec![
                Line::from(""),
                Line::from("No profile configured."),
                Line::from(Span::styled(
                    "Set [profile] handle in config.toml or open /profile/<handle>",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            let paragraph = Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(panel("Profile", true));
            frame.render_widget(paragraph, area);
        }
    }
}

fn render_not_found(frame: &mut Frame, area: Rect, path: &str) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Page not found",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(path.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press b to go back or 1 for Home",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(panel("Not Found", true));
    frame.render_widget(paragraph, area);
}
