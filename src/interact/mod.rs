//! Headless interaction model of the portfolio page.
//!
//! The browser runtime (`embed/page/runtime.js`) is a thin binding of this
//! model: every decision it makes (which nav item is active, when the bar
//! turns opaque, what the toast says and for how long) is defined here and
//! substituted into the script at build time.
//!
//! ```text
//!            ┌──────────────────────── Page ────────────────────────┐
//!  scroll ──►│ NavController ── Viewport (resolve / metrics / top)  │
//!  click  ──►│   scrolled · active · mobile_menu_open               │
//!            │                                                      │
//!  email  ──►│ Toast ── Scheduler (one TimerToken at a time)        │
//!            │   └─ Clipboard (fire-and-forget)                     │
//!            └──────────────────────────────────────────────────────┘
//! ```
//!
//! Everything runs on one event loop: handlers take `&mut self`, never
//! block and never fail.

mod clipboard;
mod nav;
mod page;
mod section;
mod toast;
mod viewport;

#[cfg(test)]
pub(crate) mod testing;

pub use clipboard::{Clipboard, ClipboardError, LinkEvent, copied_message};
pub use nav::{MenuGlyph, NavController, NavItem, find_active, is_scrolled};
pub use page::Page;
pub use section::Section;
pub use toast::{Scheduler, TimerToken, Toast};
pub use viewport::{ScrollMode, ScrollSource, Subscription, Viewport, ViewportMetrics};

use std::time::Duration;

/// Vertical offset (px) at which the navigation bar switches to its
/// opaque style. Offsets equal to the threshold count as scrolled.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// How long a toast stays visible after its last trigger.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Toast text preceding the copied address.
pub const TOAST_PREFIX: &str = "Email copied to clipboard: ";
