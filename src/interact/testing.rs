//! In-memory hosts for exercising the interaction model.

use super::{
    Clipboard, ClipboardError, LinkEvent, Scheduler, ScrollMode, ScrollSource, Subscription,
    TimerToken, Viewport, ViewportMetrics,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cell::Cell, rc::Rc, time::Duration};

/// Anchors are ids; geometry is whatever the test places.
#[derive(Debug, Default)]
pub struct FakeViewport {
    tops: FxHashMap<String, f64>,
    pub height: f64,
    pub scroll_y: f64,
    pub scrolls: Vec<(String, ScrollMode)>,
}

impl FakeViewport {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    pub fn place(&mut self, id: &str, top: f64) {
        self.tops.insert(id.to_string(), top);
    }
}

impl Viewport for FakeViewport {
    type Anchor = String;

    fn resolve(&self, id: &str) -> Option<String> {
        self.tops.contains_key(id).then(|| id.to_string())
    }

    fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics {
            height: self.height,
            scroll_y: self.scroll_y,
        }
    }

    fn anchor_top(&self, anchor: &String) -> f64 {
        self.tops.get(anchor).copied().unwrap_or(f64::NAN)
    }

    fn scroll_to(&mut self, anchor: &String, mode: ScrollMode) {
        self.scrolls.push((anchor.clone(), mode));
    }
}

/// Counts live listener registrations.
#[derive(Debug, Default)]
pub struct FakeScrollSource {
    active: Rc<Cell<usize>>,
}

impl FakeScrollSource {
    pub fn listeners(&self) -> usize {
        self.active.get()
    }
}

impl ScrollSource for FakeScrollSource {
    fn subscribe_scroll(&self) -> Subscription {
        self.active.set(self.active.get() + 1);
        let active = Rc::clone(&self.active);
        Subscription::new(move || active.set(active.get() - 1))
    }
}

/// Virtual clock; timers fire only when the test advances it.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    pending: Vec<(TimerToken, Duration)>,
    cancelled: FxHashSet<TimerToken>,
    last: Option<(TimerToken, Duration)>,
}

impl ManualScheduler {
    /// Move time forward, returning due tokens in deadline order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<_> = self.pending.iter().filter(|(_, at)| *at <= now).copied().collect();
        self.pending.retain(|(_, at)| *at > now);
        due.sort_by_key(|(_, at)| *at);
        due.into_iter().map(|(token, _)| token).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn last_scheduled(&self) -> Option<TimerToken> {
        self.last.map(|(token, _)| token)
    }

    pub fn last_delay(&self) -> Option<Duration> {
        self.last.map(|(_, delay)| delay)
    }

    pub fn was_cancelled(&self, token: TimerToken) -> bool {
        self.cancelled.contains(&token)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        self.pending.push((token, self.now + delay));
        self.last = Some((token, delay));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|(pending, _)| *pending != token);
        self.cancelled.insert(token);
    }
}

#[derive(Debug, Default)]
pub struct FakeClipboard {
    pub contents: Option<String>,
    deny: bool,
}

impl FakeClipboard {
    pub fn denying() -> Self {
        Self {
            contents: None,
            deny: true,
        }
    }
}

impl Clipboard for FakeClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.deny {
            return Err(ClipboardError::PermissionDenied);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeLinkEvent {
    pub default_prevented: bool,
}

impl LinkEvent for FakeLinkEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
