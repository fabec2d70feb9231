//! Per-post like/retweet state.
//!
//! [`PostEngagementState`] is an immutable value; [`toggle_like`] and
//! [`toggle_retweet`] return a new value. Storage lives in [`EngagementBook`],
//! owned by the app.

use std::collections::HashMap;

pub const DEFAULT_LIKE_COUNT: u32 = 348;
pub const DEFAULT_RETWEET_COUNT: u32 = 12;

/// Engagement for one rendered post.
///
/// A state can only be built un-liked and un-retweeted with seeds below
/// `u32::MAX`, so a counter is at least 1 whenever its flag is set and at
/// most `u32::MAX` after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostEngagementState {
    liked: bool,
    retweeted: bool,
    like_count: u32,
    retweet_count: u32,
}

impl Default for PostEngagementState {
    fn default() -> Self {
        Self {
            liked: false,
            retweeted: false,
            like_count: DEFAULT_LIKE_COUNT,
            retweet_count: DEFAULT_RETWEET_COUNT,
        }
    }
}

impl PostEngagementState {
    /// Un-toggled state with custom seeds. `None` when a seed leaves no room
    /// for the `+1` of a toggle.
    pub fn seeded(like_count: u32, retweet_count: u32) -> Option<Self> {
        if like_count == u32::MAX || retweet_count == u32::MAX {
            return None;
        }
        Some(Self {
            liked: false,
            retweeted: false,
            like_count,
            retweet_count,
        })
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn retweeted(&self) -> bool {
        self.retweeted
    }

    pub fn like_count(&self) -> u32 {
        self.like_count
    }

    pub fn retweet_count(&self) -> u32 {
        self.retweet_count
    }
}

/// Flip `liked` and move `like_count` one step the same way.
pub fn toggle_like(state: PostEngagementState) -> PostEngagementState {
    let (liked, like_count) = flip(state.liked, state.like_count);
    PostEngagementState {
        liked,
        like_count,
        ..state
    }
}

/// Flip `retweeted` and move `retweet_count` one step the same way.
pub fn toggle_retweet(state: PostEngagementState) -> PostEngagementState {
    let (retweeted, retweet_count) = flip(state.retweeted, state.retweet_count);
    PostEngagementState {
        retweeted,
        retweet_count,
        ..state
    }
}

fn flip(on: bool, count: u32) -> (bool, u32) {
    if on {
        (false, count - 1)
    } else {
        (true, count + 1)
    }
}

/// Engagement state for the posts currently in the feed, keyed by post id.
#[derive(Debug, Clone, Default)]
pub struct EngagementBook {
    states: HashMap<String, PostEngagementState>,
}

impl EngagementBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match the book to the rendered feed: new ids get default state, ids no
    /// longer present are dropped.
    pub fn sync<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let mut next = HashMap::new();
        for id in ids {
            let state = self.states.remove(id).unwrap_or_default();
            next.insert(id.to_string(), state);
        }
        self.states = next;
    }

    pub fn get(&self, id: &str) -> Option<&PostEngagementState> {
        self.states.get(id)
    }

    pub fn toggle_like(&mut self, id: &str) -> Option<PostEngagementState> {
        self.apply(id, toggle_like)
    }

    pub fn toggle_retweet(&mut self, id: &str) -> Option<PostEngagementState> {
        self.apply(id, toggle_retweet)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn apply(
        &mut self,
        id: &str,
        transition: fn(PostEngagementState) -> PostEngagementState,
    ) -> Option<PostEngagementState> {
        let state = self.states.get_mut(id)?;
        *state = transition(*state);
        Some(*state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_states() -> Vec<PostEngagementState> {
        let base = PostEngagementState::default();
        vec![
            base,
            toggle_like(base),
            toggle_retweet(base),
            toggle_retweet(toggle_like(base)),
            PostEngagementState::seeded(0, 0).unwrap(),
            toggle_like(PostEngagementState::seeded(0, 7).unwrap()),
            toggle_like(PostEngagementState::seeded(u32::MAX - 1, 0).unwrap()),
        ]
    }

    #[test]
    fn test_defaults() {
        let state = PostEngagementState::default();
        assert!(!state.liked());
        assert!(!state.retweeted());
        assert_eq!(state.like_count(), 348);
        assert_eq!(state.retweet_count(), 12);
    }

    #[test]
    fn test_like_twice_from_default() {
        let once = toggle_like(PostEngagementState::default());
        assert_eq!((once.liked(), once.like_count()), (true, 349));

        let twice = toggle_like(once);
        assert_eq!((twice.liked(), twice.like_count()), (false, 348));
    }

    #[test]
    fn test_retweet_twice_from_default() {
        let once = toggle_retweet(PostEngagementState::default());
        assert_eq!((once.retweeted(), once.retweet_count()), (true, 13));

        let twice = toggle_retweet(once);
        assert_eq!((twice.retweeted(), twice.retweet_count()), (false, 12));
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for state in sample_states() {
            assert_eq!(toggle_like(toggle_like(state)), state);
            assert_eq!(toggle_retweet(toggle_retweet(state)), state);
        }
    }

    #[test]
    fn test_toggles_are_independent() {
        for state in sample_states() {
            let liked = toggle_like(state);
            assert_eq!(liked.retweeted(), state.retweeted());
            assert_eq!(liked.retweet_count(), state.retweet_count());

            let retweeted = toggle_retweet(state);
            assert_eq!(retweeted.liked(), state.liked());
            assert_eq!(retweeted.like_count(), state.like_count());

            assert_eq!(
                toggle_like(toggle_retweet(state)),
                toggle_retweet(toggle_like(state))
            );
        }
    }

    #[test]
    fn test_zero_seed_never_goes_negative() {
        let mut state = PostEngagementState::seeded(0, 0).unwrap();
        for _ in 0..5 {
            state = toggle_like(state);
            state = toggle_retweet(state);
        }
        assert_eq!(state.like_count(), 1);
        assert_eq!(state.retweet_count(), 1);
    }

    #[test]
    fn test_seed_at_counter_limit_is_rejected() {
        assert!(PostEngagementState::seeded(u32::MAX, 0).is_none());
        assert!(PostEngagementState::seeded(0, u32::MAX).is_none());
    }

    #[test]
    fn test_largest_seed_toggles_without_overflow() {
        let state = PostEngagementState::seeded(u32::MAX - 1, u32::MAX - 1).unwrap();
        let liked = toggle_retweet(toggle_like(state));
        assert_eq!(liked.like_count(), u32::MAX);
        assert_eq!(liked.retweet_count(), u32::MAX);
        assert_eq!(toggle_retweet(toggle_like(liked)), state);
    }

    #[test]
    fn test_book_sync_adds_and_drops() {
        let mut book = EngagementBook::new();
        book.sync(["a", "b"]);
        assert_eq!(book.len(), 2);

        book.toggle_like("a");
        book.sync(["a", "c"]);
        assert_eq!(book.len(), 2);
        assert!(book.get("b").is_none());
        assert_eq!(book.get("a").map(|s| s.like_count()), Some(349));
        assert_eq!(book.get("c"), Some(&PostEngagementState::default()));
    }

    #[test]
    fn test_book_resync_after_removal_resets() {
        let mut book = EngagementBook::new();
        book.sync(["a"]);
        book.toggle_retweet("a");
        book.sync(std::iter::empty());
        assert!(book.is_empty());

        book.sync(["a"]);
        assert_eq!(book.get("a"), Some(&PostEngagementState::default()));
    }

    #[test]
    fn test_book_unknown_id_is_ignored() {
        let mut book = EngagementBook::new();
        assert_eq!(book.toggle_like("missing"), None);
        assert!(book.is_empty());
    }

    #[test]
    fn test_book_toggle_returns_new_state() {
        let mut book = EngagementBook::new();
        book.sync(["a"]);
        let state = book.toggle_like("a").unwrap();
        assert!(state.liked());
        assert_eq!(book.get("a"), Some(&state));
    }
}
