use std::collections::VecDeque;

use tracing::error;
use tracing::info;

use crate::contracts::ToastMessage;
use crate::contracts::ToastSeverity;

/// Fire-and-forget sink for transient notices.
pub trait ToastPresenter {
    fn present(&mut self, toast: ToastMessage);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedToast {
    pub toast: ToastMessage,
    pub remaining_ticks: u32,
}

/// Keeps the most recent toasts until their tick budget runs out.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    entries: VecDeque<QueuedToast>,
    ttl_ticks: u32,
    capacity: usize,
}

impl ToastQueue {
    pub const DEFAULT_CAPACITY: usize = 3;

    pub fn new(ttl_ticks: u32) -> Self {
        Self::with_capacity(ttl_ticks, Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(ttl_ticks: u32, capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            ttl_ticks: ttl_ticks.max(1),
            capacity: capacity.max(1),
        }
    }

    /// Ages every entry by one tick. Returns true when something expired.
    pub fn tick(&mut self) -> bool {
        let before = self.entries.len();
        for entry in &mut self.entries {
            entry.remaining_ticks = entry.remaining_ticks.saturating_sub(1);
        }
        self.entries.retain(|entry| entry.remaining_ticks > 0);
        self.entries.len() != before
    }

    pub fn latest(&self) -> Option<&ToastMessage> {
        self.entries.back().map(|entry| &entry.toast)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedToast> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl ToastPresenter for ToastQueue {
    fn present(&mut self, toast: ToastMessage) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(QueuedToast {
            toast,
            remaining_ticks: self.ttl_ticks,
        });
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingToastPresenter;

impl ToastPresenter for TracingToastPresenter {
    fn present(&mut self, toast: ToastMessage) {
        match toast.severity {
            ToastSeverity::Success => info!(text = %toast.message, "toast"),
            ToastSeverity::Error => error!(text = %toast.message, "toast"),
        }
    }
}

/// Fans one toast out to several presenters.
pub struct FanoutPresenter<'a> {
    presenters: Vec<&'a mut dyn ToastPresenter>,
}

impl<'a> FanoutPresenter<'a> {
    pub fn new(presenters: Vec<&'a mut dyn ToastPresenter>) -> Self {
        Self { presenters }
    }
}

impl ToastPresenter for FanoutPresenter<'_> {
    fn present(&mut self, toast: ToastMessage) {
        for presenter in self.presenters.iter_mut() {
            presenter.present(toast.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toasts_expire_after_their_ticks() {
        let mut queue = ToastQueue::new(2);
        queue.present(ToastMessage::success("Issue assigned successfully!"));

        assert!(!queue.tick());
        assert_eq!(queue.len(), 1);
        assert!(queue.tick());
        assert!(queue.is_empty());
    }

    #[test]
    fn oldest_toast_is_dropped_at_capacity() {
        let mut queue = ToastQueue::with_capacity(10, 2);
        queue.present(ToastMessage::success("one"));
        queue.present(ToastMessage::success("two"));
        queue.present(ToastMessage::error("three"));

        let messages: Vec<&str> = queue.iter().map(|e| e.toast.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert_eq!(
            queue.latest().map(|toast| toast.severity),
            Some(ToastSeverity::Error)
        );
    }

    #[test]
    fn zero_ttl_still_shows_for_one_tick() {
        let mut queue = ToastQueue::new(0);
        queue.present(ToastMessage::success("flash"));
        assert_eq!(queue.len(), 1);
        queue.tick();
        assert!(queue.is_empty());
    }

    #[test]
    fn fanout_reaches_every_presenter() {
        let mut first = ToastQueue::new(5);
        let mut second = ToastQueue::new(5);
        {
            let presenters: Vec<&mut dyn ToastPresenter> = vec![&mut first, &mut second];
            let mut fanout = FanoutPresenter::new(presenters);
            fanout.present(ToastMessage::success("saved"));
        }
        assert_eq!(first.latest(), second.latest());
        assert_eq!(first.len(), 1);
    }
}
