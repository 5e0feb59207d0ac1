//! Open/closed state of the page's overlays: modals, the mobile menu, the
//! notification dropdown and the dashboard sidebar.
//!
//! Modals and the mobile menu lock page scrolling while open. The lock is
//! released only when none of them is open any more.

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Modal {
    id: String,
    open: bool,
}

/// What an Escape press closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EscapeOutcome {
    pub menu_closed: bool,
    pub modal_closed: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Overlays {
    /// In page order; Escape closes the first open one.
    modals: Vec<Modal>,
    menu_open: bool,
    notifications_open: bool,
    sidebar_open: bool,
}

impl Overlays {
    pub fn new<I, S>(modal_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modals: modal_ids
                .into_iter()
                .map(|id| Modal {
                    id: id.into(),
                    open: false,
                })
                .collect(),
            ..Default::default()
        }
    }

    /// Returns false if the page has no modal with this id.
    pub fn open_modal(&mut self, id: &str) -> bool {
        match self.modals.iter_mut().find(|m| m.id == id) {
            Some(modal) => {
                modal.open = true;
                debug!("Opened modal '{}'", id);
                true
            }
            None => false,
        }
    }

    /// Close button or backdrop click. Returns false if the modal was not
    /// open.
    pub fn close_modal(&mut self, id: &str) -> bool {
        match self.modals.iter_mut().find(|m| m.id == id && m.open) {
            Some(modal) => {
                modal.open = false;
                true
            }
            None => false,
        }
    }

    pub fn is_modal_open(&self, id: &str) -> bool {
        self.modals.iter().any(|m| m.id == id && m.open)
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    /// Close button, overlay click or a link inside the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Closes the mobile menu if it is open, and the first open modal.
    pub fn escape(&mut self) -> EscapeOutcome {
        let menu_closed = std::mem::take(&mut self.menu_open);
        let modal_closed = self.modals.iter_mut().find(|m| m.open).map(|modal| {
            modal.open = false;
            modal.id.clone()
        });
        EscapeOutcome {
            menu_closed,
            modal_closed,
        }
    }

    /// Notification bell click. Returns whether the dropdown is now shown.
    pub fn toggle_notifications(&mut self) -> bool {
        self.notifications_open = !self.notifications_open;
        self.notifications_open
    }

    /// Any click outside the dropdown hides it.
    pub fn click_outside_notifications(&mut self) {
        self.notifications_open = false;
    }

    pub fn notifications_open(&self) -> bool {
        self.notifications_open
    }

    /// Dashboard sidebar button on narrow screens. Returns whether the
    /// sidebar is now open.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Whether the page body should stop scrolling.
    pub fn scroll_locked(&self) -> bool {
        self.menu_open || self.modals.iter().any(|m| m.open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Overlays {
        Overlays::new(["applyModal", "deleteModal"])
    }

    #[test]
    fn test_modal_open_close_locks_scroll() {
        let mut overlays = page();
        assert!(!overlays.scroll_locked());

        assert!(overlays.open_modal("applyModal"));
        assert!(overlays.is_modal_open("applyModal"));
        assert!(overlays.scroll_locked());

        assert!(overlays.close_modal("applyModal"));
        assert!(!overlays.close_modal("applyModal"));
        assert!(!overlays.scroll_locked());
    }

    #[test]
    fn test_unknown_modal_is_ignored() {
        let mut overlays = page();
        assert!(!overlays.open_modal("missing"));
        assert!(!overlays.scroll_locked());
    }

    #[test]
    fn test_escape_closes_first_open_modal_in_page_order() {
        let mut overlays = page();
        overlays.open_modal("deleteModal");
        overlays.open_modal("applyModal");

        assert_eq!(
            overlays.escape(),
            EscapeOutcome {
                menu_closed: false,
                modal_closed: Some("applyModal".to_string()),
            }
        );
        assert!(overlays.is_modal_open("deleteModal"));
        assert!(overlays.scroll_locked());

        overlays.escape();
        assert!(!overlays.scroll_locked());
        assert_eq!(overlays.escape(), EscapeOutcome::default());
    }

    #[test]
    fn test_escape_closes_open_menu() {
        let mut overlays = page();
        overlays.open_menu();
        assert!(overlays.scroll_locked());

        let outcome = overlays.escape();
        assert!(outcome.menu_closed);
        assert!(!overlays.is_menu_open());
        assert!(!overlays.escape().menu_closed);
    }

    #[test]
    fn test_closing_menu_keeps_lock_for_open_modal() {
        let mut overlays = page();
        overlays.open_modal("applyModal");
        overlays.open_menu();
        overlays.close_menu();
        assert!(overlays.scroll_locked());
    }

    #[test]
    fn test_notification_dropdown() {
        let mut overlays = page();
        assert!(overlays.toggle_notifications());
        assert!(!overlays.toggle_notifications());

        overlays.toggle_notifications();
        overlays.click_outside_notifications();
        assert!(!overlays.notifications_open());
        // Dropdown is not a scroll-locking overlay.
        overlays.toggle_notifications();
        assert!(!overlays.scroll_locked());
    }

    #[test]
    fn test_sidebar_toggle_does_not_lock_scroll() {
        let mut overlays = page();
        assert!(overlays.toggle_sidebar());
        assert!(overlays.sidebar_open());
        assert!(!overlays.scroll_locked());
        assert!(!overlays.toggle_sidebar());
    }
}
