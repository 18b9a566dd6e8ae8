//! Document-level click observation for the account dropdown.

use crate::app::reactivity::{Listeners, Subscription};

/// A click anywhere in the document, resolved against the dropdown's region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentClick {
    pub inside_panel: bool,
}

pub type ClickHandler = Box<dyn Fn(DocumentClick)>;

/// Something that can report document clicks until the returned guard drops.
pub trait ClickSource {
    fn on_click(&self, handler: ClickHandler) -> Subscription;
}

/// Click source fed by hand; used off-browser and in tests.
#[derive(Clone, Default)]
pub struct ClickBus {
    listeners: Listeners<DocumentClick>,
}

impl ClickBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click(&self, click: DocumentClick) {
        self.listeners.emit(&click);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ClickSource for ClickBus {
    fn on_click(&self, handler: ClickHandler) -> Subscription {
        self.listeners.add(move |click| handler(*click))
    }
}

#[cfg(feature = "web")]
pub use web::DocumentClickSource;

#[cfg(feature = "web")]
mod web {
    use wasm_bindgen::{JsCast, closure::Closure};

    use super::{ClickHandler, ClickSource, DocumentClick};
    use crate::app::reactivity::Subscription;

    /// Listens for `click` on `document` and checks containment against the
    /// dropdown element.
    pub struct DocumentClickSource {
        panel: web_sys::Element,
    }

    impl DocumentClickSource {
        pub fn new(panel: web_sys::Element) -> Self {
            Self { panel }
        }
    }

    impl ClickSource for DocumentClickSource {
        fn on_click(&self, handler: ClickHandler) -> Subscription {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                tracing::warn!("no document available, outside clicks will not close the menu");
                return Subscription::empty();
            };

            let panel = self.panel.clone();
            let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                let inside_panel = event
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                    .is_some_and(|node| panel.contains(Some(&node)));
                handler(DocumentClick { inside_panel });
            });

            if let Err(err) = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
                tracing::warn!(error = ?err, "failed to register document click listener");
                return Subscription::empty();
            }

            Subscription::new(move || {
                if let Err(err) = document.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
                    tracing::warn!(error = ?err, "failed to remove document click listener");
                }
                drop(closure);
            })
        }
    }
}
