pub mod keyboard;

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

pub use keyboard::{Keyboard, NavKey, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// One slide at a time with navigation controls.
    #[default]
    Interactive,
    /// Every slide in sequence, laid out for export.
    Print,
}

impl ViewMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "interactive" => Some(Self::Interactive),
            "print" => Some(Self::Print),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Interactive => "interactive",
            Self::Print => "print",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Interactive => Self::Print,
            Self::Print => Self::Interactive,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The single writer of navigation state: the current slide index and the
/// view mode.
///
/// `next` and `previous` clamp at the ends of the deck; `go_to` rejects
/// indices outside the deck and leaves the state untouched. A keyboard
/// subscription is held exactly while the mode is interactive.
#[derive(Debug)]
pub struct Navigator {
    current: usize,
    count: usize,
    mode: ViewMode,
    keyboard: Keyboard,
    subscription: Option<Subscription>,
}

impl Navigator {
    pub fn new(count: usize, keyboard: Keyboard) -> Result<Self> {
        if count == 0 {
            return Err(DeckError::Empty);
        }
        let subscription = Some(keyboard.subscribe());
        Ok(Self {
            current: 0,
            count,
            mode: ViewMode::Interactive,
            keyboard,
            subscription,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn at_first(&self) -> bool {
        self.current == 0
    }

    pub fn at_last(&self) -> bool {
        self.current + 1 == self.count
    }

    /// Advance one slide. Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        let target = (self.current + 1).min(self.count - 1);
        self.move_to(target)
    }

    /// Go back one slide. Returns whether the index moved.
    pub fn previous(&mut self) -> bool {
        let target = self.current.saturating_sub(1);
        self.move_to(target)
    }

    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.count {
            return Err(DeckError::InvalidIndex {
                index,
                count: self.count,
            });
        }
        self.move_to(index);
        Ok(())
    }

    pub fn first(&mut self) -> bool {
        self.move_to(0)
    }

    pub fn last(&mut self) -> bool {
        self.move_to(self.count - 1)
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.set_view_mode(self.mode.toggled());
        self.mode
    }

    /// Switch view mode, acquiring or releasing the keyboard subscription.
    /// Returns whether the mode changed.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        self.subscription = match mode {
            ViewMode::Interactive => Some(self.keyboard.subscribe()),
            ViewMode::Print => None,
        };
        log::info!("View mode: {mode}");
        true
    }

    /// Whether keyboard navigation is currently bound.
    pub fn keyboard_bound(&self) -> bool {
        self.subscription.is_some()
    }

    /// Route a key press. Ignored while no subscription is held.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if self.subscription.is_none() {
            return false;
        }
        match key {
            NavKey::Left => self.previous(),
            NavKey::Right => self.next(),
        }
    }

    fn move_to(&mut self, index: usize) -> bool {
        if index == self.current {
            return false;
        }
        log::debug!("Slide {} -> {}", self.current, index);
        self.current = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DECK_SIZE: usize = 15;

    fn navigator(count: usize) -> Navigator {
        Navigator::new(count, Keyboard::new()).unwrap()
    }

    #[test]
    fn starts_at_first_slide_interactive() {
        let mut nav = navigator(DECK_SIZE);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.view_mode(), ViewMode::Interactive);
        assert!(!nav.previous());
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn next_stops_at_last_slide() {
        let mut nav = navigator(DECK_SIZE);
        for _ in 0..14 {
            assert!(nav.next());
        }
        assert_eq!(nav.current_index(), 14);
        assert!(!nav.next());
        assert_eq!(nav.current_index(), 14);
        assert!(nav.at_last());
    }

    #[test]
    fn go_to_jumps_directly() {
        let mut nav = navigator(DECK_SIZE);
        nav.go_to(5).unwrap();
        nav.go_to(12).unwrap();
        assert_eq!(nav.current_index(), 12);
    }

    #[test]
    fn keyboard_ignored_in_print_mode() {
        let mut nav = navigator(DECK_SIZE);
        nav.go_to(3).unwrap();
        assert_eq!(nav.toggle_view_mode(), ViewMode::Print);
        assert!(!nav.handle_key(NavKey::Right));
        assert!(!nav.handle_key(NavKey::Left));
        assert_eq!(nav.current_index(), 3);
    }

    #[test]
    fn go_to_out_of_range_keeps_state() {
        let mut nav = navigator(DECK_SIZE);
        nav.go_to(7).unwrap();
        assert_eq!(
            nav.go_to(20),
            Err(DeckError::InvalidIndex {
                index: 20,
                count: DECK_SIZE
            })
        );
        assert_eq!(nav.current_index(), 7);
        assert!(nav.go_to(DECK_SIZE).is_err());
    }

    #[test]
    fn arrow_keys_move_in_interactive_mode() {
        let mut nav = navigator(DECK_SIZE);
        assert!(nav.handle_key(NavKey::Right));
        assert!(nav.handle_key(NavKey::Right));
        assert!(nav.handle_key(NavKey::Left));
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn subscription_follows_view_mode() {
        let keyboard = Keyboard::new();
        let mut nav = Navigator::new(DECK_SIZE, keyboard.clone()).unwrap();
        assert_eq!(keyboard.active(), 1);
        for _ in 0..5 {
            nav.toggle_view_mode();
            assert_eq!(keyboard.active(), 0);
            assert!(!nav.keyboard_bound());
            nav.toggle_view_mode();
            assert_eq!(keyboard.active(), 1);
            assert!(nav.keyboard_bound());
        }
        drop(nav);
        assert_eq!(keyboard.active(), 0);
    }

    #[test]
    fn setting_same_mode_is_noop() {
        let keyboard = Keyboard::new();
        let mut nav = Navigator::new(DECK_SIZE, keyboard.clone()).unwrap();
        assert!(!nav.set_view_mode(ViewMode::Interactive));
        assert_eq!(keyboard.active(), 1);
    }

    #[test]
    fn single_slide_deck() {
        let mut nav = navigator(1);
        assert!(nav.at_first() && nav.at_last());
        assert!(!nav.next());
        assert!(!nav.previous());
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(
            Navigator::new(0, Keyboard::new()).unwrap_err(),
            DeckError::Empty
        );
    }

    #[test]
    fn view_mode_names_round_trip() {
        for mode in [ViewMode::Interactive, ViewMode::Print] {
            assert_eq!(ViewMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(ViewMode::from_name("slides"), None);
    }

    proptest! {
        #[test]
        fn next_clamps(count in 1usize..40, n in 0usize..80) {
            let mut nav = navigator(count);
            for _ in 0..n {
                nav.next();
            }
            prop_assert_eq!(nav.current_index(), n.min(count - 1));
        }

        #[test]
        fn previous_clamps(count in 1usize..40, n in 0usize..80) {
            let mut nav = navigator(count);
            nav.last();
            for _ in 0..n {
                nav.previous();
            }
            prop_assert_eq!(nav.current_index(), (count - 1).saturating_sub(n));
        }

        #[test]
        fn next_then_previous_is_identity_inside(count in 3usize..40, seed in 0usize..1000) {
            let start = 1 + seed % (count - 2);
            let mut nav = navigator(count);
            nav.go_to(start).unwrap();
            nav.next();
            nav.previous();
            prop_assert_eq!(nav.current_index(), start);
        }

        #[test]
        fn go_to_sets_exact_index(count in 1usize..40, before in 0usize..40, target in 0usize..40) {
            let mut nav = navigator(count);
            let _ = nav.go_to(before % count);
            let target = target % count;
            nav.go_to(target).unwrap();
            prop_assert_eq!(nav.current_index(), target);
        }

        #[test]
        fn double_toggle_restores_mode(count in 1usize..40, index in 0usize..40) {
            let mut nav = navigator(count);
            nav.go_to(index % count).unwrap();
            nav.toggle_view_mode();
            nav.toggle_view_mode();
            prop_assert_eq!(nav.view_mode(), ViewMode::Interactive);
            prop_assert_eq!(nav.current_index(), index % count);
        }
    }
}
