use std::cell::Cell;
use std::rc::Rc;

/// Keys the navigation controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
}

/// Registry of keyboard subscriptions for one window.
///
/// All input is handled on the UI thread, so the bookkeeping is a plain
/// shared counter.
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    active: Rc<Cell<usize>>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a subscription. It is released when the returned guard drops.
    pub fn subscribe(&self) -> Subscription {
        self.active.set(self.active.get() + 1);
        log::trace!("keyboard subscription acquired ({} active)", self.active.get());
        Subscription {
            active: Rc::clone(&self.active),
        }
    }

    /// Number of live subscriptions.
    pub fn active(&self) -> usize {
        self.active.get()
    }
}

/// A live keyboard subscription.
#[derive(Debug)]
pub struct Subscription {
    active: Rc<Cell<usize>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
        log::trace!("keyboard subscription released ({} active)", self.active.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_releases_on_drop() {
        let keyboard = Keyboard::new();
        let first = keyboard.subscribe();
        let second = keyboard.subscribe();
        assert_eq!(keyboard.active(), 2);
        drop(first);
        assert_eq!(keyboard.active(), 1);
        drop(second);
        assert_eq!(keyboard.active(), 0);
    }

    #[test]
    fn clones_share_the_registry() {
        let keyboard = Keyboard::new();
        let handle = keyboard.clone();
        let _sub = handle.subscribe();
        assert_eq!(keyboard.active(), 1);
    }
}
