use super::click_outside::{ClickSource, DocumentClick};
use crate::app::reactivity::{Observable, Subscription};

/// Open/closed state of the account dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisclosurePanel {
    pub open: bool,
}

/// Owns the dropdown state.
///
/// Opening belongs to the native `<details>` toggle; the controller mirrors
/// it and only ever forces the panel closed.
#[derive(Clone)]
pub struct DisclosureController {
    panel: Observable<DisclosurePanel>,
}

impl Default for DisclosureController {
    fn default() -> Self {
        Self::new()
    }
}

impl DisclosureController {
    pub fn new() -> Self {
        Self {
            panel: Observable::new(DisclosurePanel::default()),
        }
    }

    pub fn panel(&self) -> &Observable<DisclosurePanel> {
        &self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel.with(|p| p.open)
    }

    /// Record the state the native toggle just switched to.
    pub fn sync_native(&self, open: bool) {
        self.panel.set(DisclosurePanel { open });
    }

    /// Close the panel. Returns `false` when it was already closed.
    pub fn close(&self) -> bool {
        self.panel.set(DisclosurePanel { open: false })
    }

    pub fn on_document_click(&self, click: DocumentClick) -> bool {
        if click.inside_panel {
            return false;
        }
        self.close()
    }

    /// Start observing document clicks. Observation ends when the returned
    /// guard is dropped.
    pub fn watch_clicks(&self, source: &dyn ClickSource) -> ClickOutside {
        let controller = self.clone();
        let subscription = source.on_click(Box::new(move |click| {
            if controller.on_document_click(click) {
                tracing::debug!("account menu closed by outside click");
            }
        }));
        ClickOutside { _subscription: subscription }
    }
}

/// Live outside-click observation for one mounted dropdown.
#[must_use = "the outside-click observer is removed when this guard drops"]
#[derive(Debug)]
pub struct ClickOutside {
    _subscription: Subscription,
}
