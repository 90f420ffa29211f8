use std::cell::RefCell;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

const INTRO_IMAGES_SELECTOR: &str = ".intro-images img";
const CHAT_SELECTOR: &str = ".chat1, .chat2, .chat3";
const VISIBLE_CLASS: &str = "is-visible";
const VISIBILITY_THRESHOLD: f64 = 0.5;

struct RevealBinding {
    observer: IntersectionObserver,
    _on_intersect: wasm_bindgen::closure::Closure<dyn Fn(js_sys::Array, IntersectionObserver)>,
}

thread_local! {
    static REVEAL_BINDING: RefCell<Option<RevealBinding>> = const { RefCell::new(None) };
}

/// Marks intro images and chat bubbles with `is-visible` once they first
/// become mostly visible. One observer watches the whole set; the marker is
/// never removed, so re-entering the viewport is a no-op. With no matching
/// elements no observer is constructed.
pub fn install(document: &Document) {
    REVEAL_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            old.observer.disconnect();
        }
    });

    let targets = collect_targets(document);
    if targets.is_empty() {
        return;
    }

    let on_intersect = wasm_bindgen::closure::Closure::<
        dyn Fn(js_sys::Array, IntersectionObserver),
    >::new(|entries: js_sys::Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    for target in &targets {
        observer.observe(target);
    }

    REVEAL_BINDING.with(|slot| {
        *slot.borrow_mut() = Some(RevealBinding {
            observer,
            _on_intersect: on_intersect,
        });
    });
}

fn collect_targets(document: &Document) -> Vec<Element> {
    let mut targets = Vec::new();
    for selector in [INTRO_IMAGES_SELECTOR, CHAT_SELECTOR] {
        let Ok(list) = document.query_selector_all(selector) else {
            continue;
        };
        for index in 0..list.length() {
            let Some(element) = list
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            targets.push(element);
        }
    }
    targets
}
