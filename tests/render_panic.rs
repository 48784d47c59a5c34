#![allow(non_snake_case)]

use std::{
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Mutex},
};

use dioxus::prelude::*;
use saaf_dashboard::pages::{TitledCard, RIDERS_PAGE};

fn ExplodingListing(_cx: Scope) -> Element {
    panic!("listing exploded")
}

/// Runs `f` with a panic hook that collects every panic message raised on
/// any thread, then restores the previous hook.
fn collect_panics<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let messages = Arc::new(Mutex::new(Vec::new()));

    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new({
        let messages = messages.clone();

        move |info| {
            let payload = info.payload();
            let message = payload
                .downcast_ref::<&str>()
                .map(|message| message.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_default();

            messages.lock().unwrap().push(message);
        }
    }));

    let result = f();
    panic::set_hook(previous_hook);

    let messages = messages.lock().unwrap().clone();
    (result, messages)
}

// dioxus 0.4 catches the component's panic inside the virtual dom, and the
// ssr renderer then fails on the broken scope. The card must not render as if
// nothing happened, and the original panic must still reach the panic hook.
#[test]
fn titled_card_listing_panic_is_observable() {
    let (result, messages) = collect_panics(|| {
        panic::catch_unwind(AssertUnwindSafe(|| {
            dioxus_ssr::render_lazy(rsx! {
                TitledCard {
                    title: RIDERS_PAGE.title,
                    ExplodingListing {}
                }
            })
        }))
    });

    assert!(result.is_err(), "rendering should not succeed");
    assert!(
        messages.iter().any(|message| message == "listing exploded"),
        "recorded panics: {messages:?}"
    );
}
