//! Navigation controller: scroll tracking, click-to-scroll, mobile menu.

use super::{ScrollMode, ScrollSource, SCROLL_THRESHOLD, Section, Subscription, Viewport};

/// Glyph shown on the mobile menu toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGlyph {
    Hamburger,
    Close,
}

/// One rendered nav entry. All entries are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub active: bool,
}

/// State behind the sticky navigation bar.
#[derive(Debug)]
pub struct NavController {
    scrolled: bool,
    active: Section,
    mobile_menu_open: bool,
    order: &'static [Section],
    subscription: Option<Subscription>,
}

impl Default for NavController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavController {
    pub fn new() -> Self {
        let order: &'static [Section] = &Section::ALL;
        Self {
            scrolled: false,
            active: order[0],
            mobile_menu_open: false,
            order,
            subscription: None,
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Start listening for scroll events. Remounting releases the previous
    /// registration first.
    pub fn mount(&mut self, source: &impl ScrollSource) {
        self.subscription = None;
        self.subscription = Some(source.subscribe_scroll());
    }

    pub fn unmount(&mut self) {
        self.subscription = None;
    }

    pub const fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    // ------------------------------------------------------------------
    // Event handlers
    // ------------------------------------------------------------------

    /// Recompute `scrolled` and the active section from current geometry.
    ///
    /// When no anchor qualifies the previous active section is kept.
    pub fn on_scroll<V: Viewport>(&mut self, viewport: &V) {
        let metrics = viewport.metrics();
        self.scrolled = is_scrolled(metrics.scroll_y);

        if let Some(section) = find_active(self.order, viewport, metrics.height) {
            self.active = section;
        }
    }

    /// Smooth-scroll to the anchor named `id` and close the mobile menu.
    ///
    /// An unknown id scrolls nothing. Returns whether an anchor was found.
    pub fn navigate_to<V: Viewport>(&mut self, id: &str, viewport: &mut V) -> bool {
        let found = match viewport.resolve(id) {
            Some(anchor) => {
                viewport.scroll_to(&anchor, ScrollMode::Smooth);
                true
            }
            None => false,
        };
        self.mobile_menu_open = false;
        found
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    // ------------------------------------------------------------------
    // Render state
    // ------------------------------------------------------------------

    pub const fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub const fn active(&self) -> Section {
        self.active
    }

    pub const fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub const fn order(&self) -> &'static [Section] {
        self.order
    }

    pub fn items(&self) -> impl Iterator<Item = NavItem> + '_ {
        self.order.iter().map(|&section| NavItem {
            section,
            active: section == self.active,
        })
    }

    pub const fn menu_glyph(&self) -> MenuGlyph {
        if self.mobile_menu_open {
            MenuGlyph::Close
        } else {
            MenuGlyph::Hamburger
        }
    }
}

/// Whether a vertical offset puts the bar in its scrolled style.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y >= SCROLL_THRESHOLD
}

/// First section in `order` whose anchor top lies in `[0, height / 2]`.
///
/// A first-match scan, not a nearest-match search: once every anchor has
/// scrolled above the viewport nothing matches.
pub fn find_active<V: Viewport>(order: &[Section], viewport: &V, height: f64) -> Option<Section> {
    let band = 0.0..=height / 2.0;
    order.iter().copied().find(|section| {
        viewport
            .resolve(section.id())
            .is_some_and(|anchor| band.contains(&viewport.anchor_top(&anchor)))
    })
}
