use crate::config::Config;
use crate::engagement::{EngagementBook, PostEngagementState};
use crate::feeds::demo::DemoFetcher;
use crate::feeds::file::FileFetcher;
use crate::feeds::{ensure_unique_ids, normalize_handle, FeedData, FeedFetcher, FeedMessage, Post};
use crate::layout::{compose, Center, Composition};
use crate::routing::{self, Navigator, Page, ROUTES};
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, widgets::ListState, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    Feed(FeedMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Navigate,
}

pub struct App {
    config: Config,
    navigator: Navigator,
    center: Center,
    posts: Vec<Post>,
    engagement: EngagementBook,
    feed_status: FeedStatus,
    selected_index: usize,
    list_state: ListState,
    mode: InputMode,
    path_input: String,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let start = config.general.start_path.clone();
        let center = Center::from_resolution(routing::resolve(&start, &ROUTES));
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            config,
            navigator: Navigator::new(start),
            center,
            posts: Vec::new(),
            engagement: EngagementBook::new(),
            feed_status: FeedStatus::Loading,
            selected_index: 0,
            list_state,
            mode: InputMode::Normal,
            path_input: String::new(),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn create_fetcher(&self) -> Box<dyn FeedFetcher> {
        match self.config.feed_path() {
            Some(path) => Box::new(FileFetcher::new(path)),
            None => Box::new(DemoFetcher),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn current_path(&self) -> &str {
        self.navigator.current()
    }

    pub fn center(&self) -> &Center {
        &self.center
    }

    pub fn composition(&self) -> Composition {
        compose(self.center.clone())
    }

    pub fn feed_status(&self) -> &FeedStatus {
        &self.feed_status
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn list_state(&self) -> ListState {
        self.list_state.clone()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn engagement(&self, post: &Post) -> PostEngagementState {
        self.engagement.get(&post.id).copied().unwrap_or_default()
    }

    /// Handle of the profile being shown: `/profile/<name>` or the configured one.
    pub fn profile_handle(&self) -> Option<String> {
        let from_path = routing::subpath("/profile/*", self.current_path())
            .and_then(|rest| rest.split('/').next())
            .filter(|name| !name.is_empty())
            .map(normalize_handle);

        from_path.or_else(|| self.config.profile.handle.as_deref().map(normalize_handle))
    }

    /// Posts listed in the center region for the current page.
    pub fn visible_posts(&self) -> Vec<&Post> {
        match self.center.page() {
            Some(Page::Home) => self.posts.iter().collect(),
            Some(Page::Profile) => match self.profile_handle() {
                Some(handle) => self
                    .posts
                    .iter()
                    .filter(|post| {
                        post.handle
                            .as_deref()
                            .is_some_and(|h| normalize_handle(h).eq_ignore_ascii_case(&handle))
                    })
                    .collect(),
                None => Vec::new(),
            },
            Some(Page::Notifications) => self
                .posts
                .iter()
                .filter(|post| {
                    let state = self.engagement(post);
                    state.liked() || state.retweeted()
                })
                .collect(),
            Some(Page::Explore) | None => Vec::new(),
        }
    }

    pub fn navigate(&mut self, path: &str) {
        if !self.navigator.navigate(path) {
            return;
        }
        info!(path, "navigate");
        self.refresh_center();
    }

    pub fn back(&mut self) {
        if self.navigator.back() {
            info!(path = self.navigator.current(), "navigate back");
            self.refresh_center();
        } else {
            self.status_message = Some("No earlier page".to_string());
        }
    }

    fn refresh_center(&mut self) {
        let resolved = routing::resolve(self.navigator.current(), &ROUTES);
        if let Err(e) = &resolved {
            warn!(error = %e, "route not found");
            self.status_message = Some(e.to_string());
        }
        self.center = Center::from_resolution(resolved);
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    pub fn update_feed(&mut self, data: FeedData) {
        match data {
            FeedData::Posts(mut posts) => {
                ensure_unique_ids(&mut posts);
                self.engagement.sync(posts.iter().map(|p| p.id.as_str()));
                self.posts = posts;
                self.feed_status = FeedStatus::Ready;
                self.clamp_selection();
            }
            FeedData::Error(e) => {
                warn!(error = %e, "feed load failed");
                self.feed_status = FeedStatus::Error(e);
            }
        }
    }

    fn selected_post_id(&self) -> Option<String> {
        self.visible_posts()
            .get(self.selected_index)
            .map(|post| post.id.clone())
    }

    pub fn toggle_like_selected(&mut self) {
        if let Some(id) = self.selected_post_id() {
            self.engagement.toggle_like(&id);
            self.clamp_selection();
        }
    }

    pub fn toggle_retweet_selected(&mut self) {
        if let Some(id) = self.selected_post_id() {
            self.engagement.toggle_retweet(&id);
            self.clamp_selection();
        }
    }

    pub fn scroll_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn scroll_down(&mut self) {
        let len = self.visible_posts().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    // The Notifications list shrinks when a post is un-liked from it.
    fn clamp_selection(&mut self) {
        let len = self.visible_posts().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn open_path_prompt(&mut self) {
        self.mode = InputMode::Navigate;
        self.path_input = "/".to_string();
    }

    pub fn close_path_prompt(&mut self) {
        self.mode = InputMode::Normal;
        self.path_input.clear();
    }

    fn submit_path_prompt(&mut self) {
        let path = std::mem::take(&mut self.path_input);
        self.mode = InputMode::Normal;
        if !path.trim().is_empty() {
            self.navigate(path.trim());
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        self.status_message = None;

        match self.mode {
            InputMode::Navigate => match key.code {
                KeyCode::Esc => self.close_path_prompt(),
                KeyCode::Enter => self.submit_path_prompt(),
                KeyCode::Backspace => {
                    self.path_input.pop();
                }
                KeyCode::Char(c) => self.path_input.push(c),
                _ => {}
            },
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('1') | KeyCode::Char('h') => self.navigate(Page::Home.path()),
                KeyCode::Char('2') | KeyCode::Char('e') => self.navigate(Page::Explore.path()),
                KeyCode::Char('3') | KeyCode::Char('n') => {
                    self.navigate(Page::Notifications.path())
                }
                KeyCode::Char('4') | KeyCode::Char('p') => self.navigate(Page::Profile.path()),
                KeyCode::Char(':') => self.open_path_prompt(),
                KeyCode::Char('b') | KeyCode::Backspace => self.back(),
                KeyCode::Char('k') | KeyCode::Up => self.scroll_up(),
                KeyCode::Char('j') | KeyCode::Down => self.scroll_down(),
                KeyCode::Char('l') => self.toggle_like_selected(),
                KeyCode::Char('r') => self.toggle_retweet_selected(),
                _ => {}
            },
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Feed(message) => {
                info!(source = %message.source, "feed update");
                self.update_feed(message.data);
            }
            AppEvent::Resize | AppEvent::Tick => {}
        }
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_input_reader(tx.clone(), Duration::from_millis(self.config.general.tick_rate_ms));
        spawn_feed_loader(self.create_fetcher(), tx);

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let Some(event) = rx.recv().await else {
                break;
            };
            self.handle_event(event);

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

fn spawn_input_reader(tx: mpsc::UnboundedSender<AppEvent>, tick_rate: Duration) {
    tokio::task::spawn_blocking(move || loop {
        let event = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    warn!(error = %e, "terminal read failed");
                    break;
                }
            },
            Ok(false) => AppEvent::Tick,
            Err(e) => {
                warn!(error = %e, "terminal poll failed");
                break;
            }
        };
        if tx.send(event).is_err() {
            break;
        }
    });
}

fn spawn_feed_loader(fetcher: Box<dyn FeedFetcher>, tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let source = fetcher.name().to_string();
        let data = match fetcher.fetch().await {
            Ok(data) => data,
            Err(e) => FeedData::Error(format!("{:#}", e)),
        };
        let _ = tx.send(AppEvent::Feed(FeedMessage { source, data }));
    });
}
