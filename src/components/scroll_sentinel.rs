//! Scroll Sentinel Component
//!
//! Empty element after the last row. It reports when it becomes fully
//! visible inside the scroll container, and is re-armed each time the
//! pagination cursor moves. A failed load does not move the cursor, so the
//! same page is asked for again only after the user scrolls.

use js_sys::Array;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct Watcher {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Watcher {
    fn new(root: Option<web_sys::Element>, on_visible: Callback<()>) -> Option<Self> {
        let callback: ObserverCallback = Closure::new(move |entries: Array, _: IntersectionObserver| {
            let visible = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if visible {
                on_visible.run(());
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(1.0));
        options.set_root(root.as_ref());

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => Some(Self {
                observer,
                _callback: callback,
            }),
            Err(e) => {
                log::error!("[Scroll] IntersectionObserver unavailable: {:?}", e);
                None
            }
        }
    }

    /// Re-observing makes the browser deliver a fresh initial entry, so a
    /// sentinel that is still on screen after a page lands triggers again.
    fn rearm(&self, target: &web_sys::Element, armed: bool) {
        self.observer.unobserve(target);
        if armed {
            self.observer.observe(target);
        }
    }
}

#[component]
pub fn ScrollSentinel(
    /// Scroll container used as the intersection root
    root: NodeRef<Div>,
    /// Next page to load; `None` disarms the sentinel for good
    #[prop(into)]
    cursor: Signal<Option<u32>>,
    #[prop(into)] on_visible: Callback<()>,
) -> impl IntoView {
    let sentinel = NodeRef::<Div>::new();
    let watcher = StoredValue::new_local(None::<Watcher>);

    Effect::new(move |_| {
        let armed = cursor.get().is_some();
        let Some(target) = sentinel.get() else {
            return;
        };
        watcher.update_value(|slot| {
            if slot.is_none() {
                let root = root.get_untracked().map(|el| el.unchecked_into::<web_sys::Element>());
                *slot = Watcher::new(root, on_visible);
            }
            if let Some(w) = slot {
                w.rearm(&target, armed);
            }
        });
    });

    on_cleanup(move || {
        watcher.try_update_value(|slot| {
            if let Some(w) = slot.take() {
                w.observer.disconnect();
            }
        });
    });

    view! { <div class="scroll-sentinel" node_ref=sentinel></div> }
}
