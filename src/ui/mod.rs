//! Rendering for the three-region screen.
//!
//! ```text
//! ┌──────────┬────────────────────────┬────────────┐
//! │ left     │ center                 │ right      │
//! │ rail     │ (routed page)          │ rail       │
//! └──────────┴────────────────────────┴────────────┘
//! ```
//!
//! The path prompt and status line are drawn over the center region.

pub mod widgets;

use crate::app::{App, InputMode};
use crate::layout::{self, Rail};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let composition = app.composition();
    let regions = layout::split(frame.area());

    render_rail(frame, composition.left, regions.left, app);
    widgets::pages::render(frame, regions.center, &composition.center, app);
    render_rail(frame, composition.right, regions.right, app);

    if app.mode() == InputMode::Navigate {
        widgets::prompt::render(frame, regions.center, app.path_input());
    }

    if let Some(message) = app.status_message() {
        widgets::prompt::render_status(frame, regions.center, message);
    }
}

fn render_rail(frame: &mut Frame, rail: Rail, area: ratatui::layout::Rect, app: &App) {
    match rail {
        Rail::LeftSidebar => widgets::left_sidebar::render(frame, area, app),
        Rail::RightSidebar => widgets::right_sidebar::render(frame, area, app),
    }
}
