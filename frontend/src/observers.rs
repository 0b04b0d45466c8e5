use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct WatchOptions {
    pub thresholds: Vec<f64>,
    pub root_margin: Option<String>,
}

impl WatchOptions {
    pub fn threshold(value: f64) -> Self {
        Self {
            thresholds: vec![value],
            root_margin: None,
        }
    }

    pub fn with_root_margin(mut self, margin: &str) -> Self {
        self.root_margin = Some(margin.to_string());
        self
    }

    fn to_init(&self) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        let thresholds: Array = self.thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
        init.set_threshold(&thresholds);
        if let Some(margin) = &self.root_margin {
            init.set_root_margin(margin);
        }
        init
    }
}

/// An `IntersectionObserver` together with the closure it calls back into.
/// Dropping the watch disconnects the observer, so no entry is delivered
/// after the owning component has gone away.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionWatch {
    pub fn new<F>(options: &WatchOptions, mut on_entry: F) -> Result<Self, JsValue>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options.to_init(),
        )?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Latches `isIntersecting` of the last entry seen for `node_ref`.
#[hook]
pub fn use_intersecting(node_ref: NodeRef, options: WatchOptions) -> bool {
    let intersecting = use_state_eq(|| false);

    {
        let intersecting = intersecting.clone();
        use_effect_with_deps(
            move |(node_ref, options)| {
                let watch = node_ref.cast::<Element>().and_then(|target| {
                    match IntersectionWatch::new(options, move |entry, _| {
                        intersecting.set(entry.is_intersecting());
                    }) {
                        Ok(watch) => {
                            watch.observe(&target);
                            Some(watch)
                        }
                        Err(e) => {
                            warn!("IntersectionObserver unavailable: {:?}", e);
                            None
                        }
                    }
                });
                move || drop(watch)
            },
            (node_ref, options),
        );
    }

    *intersecting
}

/// Flips to `true` the first time `node_ref` crosses `threshold` and then
/// stops watching it. Drives the one-shot entrance animations.
#[hook]
pub fn use_reveal_once(node_ref: NodeRef, threshold: f64) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node_ref| {
                let options = WatchOptions::threshold(threshold);
                let watch = node_ref.cast::<Element>().and_then(|target| {
                    let on_reveal = revealed.clone();
                    match IntersectionWatch::new(&options, move |entry, observer| {
                        if entry.is_intersecting() {
                            on_reveal.set(true);
                            observer.unobserve(&entry.target());
                        }
                    }) {
                        Ok(watch) => {
                            watch.observe(&target);
                            Some(watch)
                        }
                        Err(e) => {
                            warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
                            revealed.set(true);
                            None
                        }
                    }
                });
                move || drop(watch)
            },
            node_ref,
        );
    }

    *revealed
}
