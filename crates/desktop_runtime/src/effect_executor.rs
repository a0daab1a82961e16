//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before processing so nested dispatches enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(effect);
        }
    });
}

fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowInput(window_id) => {
            focus_window_element(crate::components::window_dom_id(window_id));
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn focus_window_element(dom_id: String) {
    use wasm_bindgen::JsCast;

    // The window element may not be mounted until the next frame.
    request_animation_frame(move || {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(&dom_id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
        match element {
            Some(element) => {
                if let Err(err) = element.focus() {
                    logging::warn!("window focus failed: {err:?}");
                }
            }
            None => logging::debug_warn!("focus target `{dom_id}` not found"),
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn focus_window_element(_: String) {}
