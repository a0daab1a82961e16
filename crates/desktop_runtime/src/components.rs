//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};

use crate::{
    apps,
    icons::{IconName, IconSize, ShellIcon},
    model::{AppKind, WindowId},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// DOM id of the frame element for `window_id`, used as the keyboard focus target.
pub fn window_dom_id(window_id: WindowId) -> String {
    format!("desktop-window-{}", window_id.0)
}

#[component]
fn DesktopIcon(kind: AppKind) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let metadata = apps::app_metadata(kind);

    view! {
        <button
            type="button"
            class="desktop-icon"
            title=format!("Open {}", metadata.display_name)
            on:click=move |_| runtime.open_app(kind)
        >
            <ShellIcon icon=metadata.icon_src size=IconSize::Lg />
            <span>{metadata.display_name}</span>
        </button>
    }
}

#[component]
/// Renders the desktop icon grid, the open windows and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let config = runtime.config.get_value();
    let window_ids = create_memo(move |_| {
        runtime
            .state
            .with(|registry| registry.opened_apps().iter().map(|w| w.id).collect::<Vec<_>>())
    });

    view! {
        <div
            class="desktop-shell"
            style=format!("--taskbar-height:{}px;", config.taskbar_height_px)
        >
            <div class="desktop-icons" role="list">
                {config
                    .desktop_icons
                    .into_iter()
                    .map(|kind| view! { <DesktopIcon kind=kind /> })
                    .collect_view()}
            </div>
            <div
                class="desktop-window-layer"
                on:pointerdown=move |ev| {
                    // A press on the bare desktop (not inside a window) drops focus.
                    if ev.target() == ev.current_target() {
                        runtime.focus(None);
                    }
                }
            >
                <For each=move || window_ids.get() key=|id| *id let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
            </div>
            <Taskbar />
        </div>
    }
}
