//! Host capabilities needed by the navigation controller.

use std::fmt;

/// Viewport geometry sampled at event time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// Visible height in px.
    pub height: f64,
    /// Current vertical scroll offset in px.
    pub scroll_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Animated; a later request retargets an animation in flight.
    Smooth,
    Instant,
}

/// Read access to page geometry plus the scroll primitive.
///
/// In a browser this is `document.getElementById`, `innerHeight`/`scrollY`,
/// `getBoundingClientRect().top` and `scrollIntoView`.
pub trait Viewport {
    /// Handle to a rendered anchor element.
    type Anchor;

    fn resolve(&self, id: &str) -> Option<Self::Anchor>;

    fn metrics(&self) -> ViewportMetrics;

    /// Top edge of the anchor relative to the viewport top.
    fn anchor_top(&self, anchor: &Self::Anchor) -> f64;

    /// Fire-and-forget; not awaited.
    fn scroll_to(&mut self, anchor: &Self::Anchor, mode: ScrollMode);
}

/// Source of scroll events (the window in a browser).
pub trait ScrollSource {
    /// Register interest in scroll events until the returned guard drops.
    fn subscribe_scroll(&self) -> Subscription;
}

/// Listener registration released exactly once, on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
