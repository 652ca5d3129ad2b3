//! Transient notices
//!
//! One slot, newest wins, auto-dismissed after a fixed TTL. Expiry is
//! evaluated on read so no timer task is needed.

use std::time::{Duration, Instant};

/// Default lifetime of a notice
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient success/error banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Holder for the currently visible notice
#[derive(Debug)]
pub struct NoticeBoard {
    slot: Option<(Notice, Instant)>,
    ttl: Duration,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self { slot: None, ttl }
    }

    /// Show a notice, superseding whatever was visible
    pub fn post(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.slot = Some((
            Notice {
                level,
                text: text.into(),
            },
            Instant::now(),
        ));
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.post(NoticeLevel::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.post(NoticeLevel::Error, text);
    }

    /// The visible notice, if it has not yet expired
    pub fn current(&self) -> Option<&Notice> {
        match &self.slot {
            Some((notice, posted_at)) if posted_at.elapsed() < self.ttl => Some(notice),
            _ => None,
        }
    }

    pub fn dismiss(&mut self) {
        self.slot = None;
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_notice_supersedes() {
        let mut board = NoticeBoard::default();
        board.success("saved");
        board.error("load failed");

        let notice = board.current().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "load failed");
    }

    #[test]
    fn notices_expire_after_ttl() {
        let mut board = NoticeBoard::new(Duration::from_millis(10));
        board.success("saved");
        assert!(board.current().is_some());

        std::thread::sleep(Duration::from_millis(20));
        assert!(board.current().is_none());
    }

    #[test]
    fn dismiss_clears_immediately() {
        let mut board = NoticeBoard::default();
        board.success("saved");
        board.dismiss();
        assert!(board.current().is_none());
    }
}
