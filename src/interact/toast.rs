//! Auto-dismissing confirmation message.

use super::TOAST_DURATION;
use std::time::Duration;

/// Identity of one scheduled dismissal. Only the newest token clears the
/// toast; older ones are cancelled and ignored if they fire anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Delayed-callback host (`setTimeout` / `clearTimeout` in a browser).
///
/// When a scheduled delay elapses the host calls [`Toast::expire`] (or
/// [`Page::on_timer`](super::Page::on_timer)) with the token.
pub trait Scheduler {
    fn schedule(&mut self, token: TimerToken, delay: Duration);

    fn cancel(&mut self, token: TimerToken);
}

/// At most one visible message with one pending dismissal.
#[derive(Debug, Default)]
pub struct Toast {
    message: Option<String>,
    pending: Option<TimerToken>,
    issued: u64,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing any visible one and restarting the delay.
    pub fn show<S: Scheduler>(&mut self, message: impl Into<String>, scheduler: &mut S) {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }

        self.issued += 1;
        let token = TimerToken(self.issued);

        self.message = Some(message.into());
        self.pending = Some(token);
        scheduler.schedule(token, TOAST_DURATION);
    }

    /// Dismiss if `token` is the current one. Returns whether it cleared.
    pub fn expire(&mut self, token: TimerToken) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.pending = None;
        self.message = None;
        true
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub const fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}
