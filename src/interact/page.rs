//! Page-level interaction state: navigation plus the email toast.

use super::{
    Clipboard, LinkEvent, NavController, Scheduler, ScrollSource, TimerToken, Toast, Viewport,
    copied_message,
};
use crate::{content::Resume, log};
use std::sync::Arc;

/// Root of the interaction model, built around the shared resume.
#[derive(Debug)]
pub struct Page {
    resume: Arc<Resume>,
    nav: NavController,
    toast: Toast,
}

impl Page {
    pub fn new(resume: Arc<Resume>) -> Self {
        Self {
            resume,
            nav: NavController::new(),
            toast: Toast::new(),
        }
    }

    pub fn mount(&mut self, source: &impl ScrollSource) {
        self.nav.mount(source);
    }

    /// Release the scroll listener. Also happens when the page drops.
    pub fn unmount(&mut self) {
        self.nav.unmount();
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    pub const fn nav(&self) -> &NavController {
        &self.nav
    }

    pub fn toast_message(&self) -> Option<&str> {
        self.toast.message()
    }

    // ------------------------------------------------------------------
    // Event handlers
    // ------------------------------------------------------------------

    pub fn on_scroll<V: Viewport>(&mut self, viewport: &V) {
        self.nav.on_scroll(viewport);
    }

    pub fn on_nav_click<V: Viewport>(&mut self, id: &str, viewport: &mut V) {
        self.nav.navigate_to(id, viewport);
    }

    pub fn on_menu_toggle(&mut self) {
        self.nav.toggle_mobile_menu();
    }

    /// Copy the configured email instead of following the `mailto:` link.
    ///
    /// The confirmation is shown whether or not the clipboard accepted the
    /// write.
    pub fn on_email_click<E, C, S>(&mut self, event: &mut E, clipboard: &mut C, scheduler: &mut S)
    where
        E: LinkEvent,
        C: Clipboard,
        S: Scheduler,
    {
        event.prevent_default();

        let email = &self.resume.personal.email;
        if let Err(err) = clipboard.write_text(email) {
            log!("clipboard"; "{err}");
        }

        self.toast.show(copied_message(email), scheduler);
    }

    /// Deliver an elapsed toast timer.
    pub fn on_timer(&mut self, token: TimerToken) {
        self.toast.expire(token);
    }
}
