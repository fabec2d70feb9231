use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use xfeed::app::App;
use xfeed::config::Config;
use xfeed::feeds::export::parse_export;
use xfeed::feeds::{FeedData, Post};
use xfeed::layout::{compose, Center, Rail};
use xfeed::routing::{resolve, Page, ROUTES};
use xfeed::ui;

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
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

fn press(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
}

#[test]
fn explore_path_composes_explore_in_center() {
    let page = resolve("/explore/trending", &ROUTES).unwrap();
    assert_eq!(page, Page::Explore);

    let composition = compose(Center::Page(page));
    assert_eq!(composition.left, Rail::LeftSidebar);
    assert_eq!(composition.center, Center::Page(Page::Explore));
    assert_eq!(composition.right, Rail::RightSidebar);
}

#[test]
fn bare_post_shows_fallbacks_and_seed_counts() {
    let mut app = App::new(Config::default());
    app.update_feed(FeedData::Posts(vec![Post::new("p1", "just content")]));

    let text = screen(&app);
    assert!(text.contains("User Name"));
    assert!(text.contains("@username · 2h"));
    assert!(text.contains("/src/avatar.jpg"));
    assert!(text.contains("♡ 348"));
    assert!(text.contains("⟲ 12"));
}

#[test]
fn like_then_unlike_updates_screen() {
    let mut app = App::new(Config::default());
    app.update_feed(FeedData::Posts(vec![Post::new("p1", "just content")]));

    press(&mut app, 'l');
    assert!(screen(&app).contains("♥ 349"));

    press(&mut app, 'l');
    assert!(screen(&app).contains("♡ 348"));
}

#[test]
fn unknown_route_shows_not_found_between_rails() {
    let mut app = App::new(Config::default());
    app.update_feed(FeedData::Posts(Vec::new()));
    app.navigate("/unknown");

    let text = screen(&app);
    assert!(text.contains("Page not found"));
    assert!(text.contains("What's happening"));
    assert!(text.contains("Home"));
}

#[test]
fn engagement_resets_when_post_leaves_feed() {
    let mut app = App::new(Config::default());
    let post = Post::new("p1", "just content");
    app.update_feed(FeedData::Posts(vec![post.clone()]));
    press(&mut app, 'r');
    assert_eq!(app.engagement(&post).retweet_count(), 13);

    app.update_feed(FeedData::Posts(Vec::new()));
    app.update_feed(FeedData::Posts(vec![post.clone()]));
    assert_eq!(app.engagement(&post).retweet_count(), 12);
    assert!(!app.engagement(&post).retweeted());
}

#[test]
fn repeated_export_ids_keep_separate_likes() {
    let json = r#"[
        {"id": 1, "user": {"id": 1, "username": "a"}, "text_content": "first"},
        {"id": 1, "user": {"id": 2, "username": "b"}, "text_content": "second"}
    ]"#;
    let posts = parse_export(json, Utc::now()).unwrap();

    let mut app = App::new(Config::default());
    app.update_feed(FeedData::Posts(posts));
    press(&mut app, 'l');

    let first = app.posts()[0].clone();
    let second = app.posts()[1].clone();
    assert!(app.engagement(&first).liked());
    assert!(!app.engagement(&second).liked());
    assert_eq!(app.engagement(&second).like_count(), 348);
}
