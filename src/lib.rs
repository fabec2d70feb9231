//! Terminal social feed: a left navigation rail, a routed center page and a
//! right rail, with session-local like/retweet state per post.

pub mod app;
pub mod config;
pub mod engagement;
pub mod feeds;
pub mod layout;
pub mod logging;
pub mod routing;
pub mod tui;
pub mod ui;
