//! Three-region page composition: left rail, routed center, right rail.

use crate::routing::{Page, RouteError};
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// What occupies the center region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Center {
    Page(Page),
    NotFound(String),
}

impl Center {
    /// The layout layer's fallback for paths no route matches.
    pub fn from_resolution(resolved: Result<Page, RouteError>) -> Self {
        match resolved {
            Ok(page) => Center::Page(page),
            Err(RouteError::NoMatch(path)) => Center::NotFound(path),
        }
    }

    pub fn page(&self) -> Option<Page> {
        match self {
            Center::Page(page) => Some(*page),
            Center::NotFound(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rail {
    LeftSidebar,
    RightSidebar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub left: Rail,
    pub center: Center,
    pub right: Rail,
}

pub fn compose(center: Center) -> Composition {
    Composition {
        left: Rail::LeftSidebar,
        center,
        right: Rail::RightSidebar,
    }
}

/// Screen areas for a composition, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub left: Rect,
    pub center: Rect,
    pub right: Rect,
}

pub fn split(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(55),
            Constraint::Percentage(25),
        ])
        .split(area);

    Regions {
        left: chunks[0],
        center: chunks[1],
        right: chunks[2],
    }
}

/// A `percent_x` by `percent_y` rectangle centered in `r`, for popups.
pub fn center_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(r);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
