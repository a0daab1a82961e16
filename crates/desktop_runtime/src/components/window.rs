use super::*;
use crate::model::WindowEntity;

fn window_style(window: &WindowEntity) -> String {
    format!(
        "z-index:{};min-width:{};min-height:{};",
        window.z_index, window.min_size.width, window.min_size.height
    )
}

fn window_class(window: &WindowEntity, focused: bool) -> String {
    let focused_class = if focused { " focused" } else { "" };
    let minimized_class = if window.is_minimize { " minimized" } else { "" };
    let fullscreen_class = if window.is_fullscreen { " fullscreen" } else { "" };
    format!("desktop-window{focused_class}{minimized_class}{fullscreen_class}")
}

fn stop_pointer_event(ev: &web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window = create_memo(move |_| {
        runtime
            .state
            .with(|registry| registry.window(window_id).cloned())
    });
    let focused = create_memo(move |_| runtime.state.with(|registry| registry.is_focused(window_id)));

    let Some(initial) = window.get_untracked() else {
        return ().into_view();
    };
    // Built once so app-local state survives focus and flag changes.
    let contents = apps::render_window_contents(&initial);

    let focus = move |_| {
        if !focused.get_untracked() {
            runtime.focus(Some(window_id));
        }
    };
    let minimize = move |_| runtime.set_is_minimize(window_id, true);
    let toggle_fullscreen = move |_| {
        if let Some(win) = window.get_untracked() {
            runtime.set_is_fullscreen(window_id, !win.is_fullscreen);
        }
    };
    let close = move |_| runtime.close_app(window_id);

    view! {
        <section
            id=window_dom_id(window_id)
            class=move || {
                window
                    .get()
                    .map(|win| window_class(&win, focused.get()))
                    .unwrap_or_default()
            }
            style=move || window.get().map(|win| window_style(&win)).unwrap_or_default()
            tabindex="-1"
            role="dialog"
            aria-label=initial.display_name
            aria-hidden=move || window.get().map(|win| win.is_minimize).unwrap_or(true).to_string()
            on:pointerdown=focus
        >
            <header class="titlebar">
                <div class="titlebar-title">
                    <ShellIcon icon=initial.icon_src size=IconSize::Md />
                    <span>{initial.display_name}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev| stop_pointer_event(&ev)
                        on:click=minimize
                    >
                        <ShellIcon icon=IconName::WindowMinimize />
                    </button>
                    <button
                        type="button"
                        aria-label=move || {
                            if window.get().map(|win| win.is_fullscreen).unwrap_or(false) {
                                "Exit fullscreen"
                            } else {
                                "Fullscreen"
                            }
                        }
                        on:pointerdown=move |ev| stop_pointer_event(&ev)
                        on:click=toggle_fullscreen
                    >
                        {move || {
                            let icon = if window.get().map(|win| win.is_fullscreen).unwrap_or(false) {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMaximize
                            };
                            view! { <ShellIcon icon=icon /> }
                        }}
                    </button>
                    <button
                        type="button"
                        aria-label="Close window"
                        on:pointerdown=move |ev| stop_pointer_event(&ev)
                        on:click=close
                    >
                        <ShellIcon icon=IconName::Dismiss />
                    </button>
                </div>
            </header>
            <div class="window-body">{contents}</div>
        </section>
    }
    .into_view()
}
