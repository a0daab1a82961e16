use super::*;
use crate::{model::WindowRegistry, reducer::WindowAction};

/// Translates a taskbar click into registry primitives.
///
/// Minimized windows are restored and focused, the focused window is minimized, and any other
/// window is brought to the front.
pub(crate) fn taskbar_toggle_actions(
    registry: &WindowRegistry,
    window_id: WindowId,
) -> Vec<WindowAction> {
    let Some(window) = registry.window(window_id) else {
        return Vec::new();
    };

    if window.is_minimize {
        vec![
            WindowAction::SetIsMinimize {
                window_id,
                value: false,
            },
            WindowAction::Focus {
                window_id: Some(window_id),
            },
        ]
    } else if registry.is_focused(window_id) {
        vec![WindowAction::SetIsMinimize {
            window_id,
            value: true,
        }]
    } else {
        vec![WindowAction::Focus {
            window_id: Some(window_id),
        }]
    }
}

#[component]
fn TaskbarWindowButton(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window = create_memo(move |_| {
        runtime
            .state
            .with(|registry| registry.window(window_id).cloned())
    });
    let focused = create_memo(move |_| runtime.state.with(|registry| registry.is_focused(window_id)));

    let toggle = move |_| {
        let actions = runtime
            .state
            .with_untracked(|registry| taskbar_toggle_actions(registry, window_id));
        for action in actions {
            runtime.dispatch_action(action);
        }
    };

    view! {
        <button
            type="button"
            class=move || {
                let minimized = window.get().map(|win| win.is_minimize).unwrap_or(false);
                format!(
                    "taskbar-window-button{}{}",
                    if focused.get() { " active" } else { "" },
                    if minimized { " minimized" } else { "" }
                )
            }
            aria-pressed=move || focused.get().to_string()
            on:click=toggle
        >
            {move || {
                window
                    .get()
                    .map(|win| {
                        view! {
                            <ShellIcon icon=win.icon_src />
                            <span>{win.display_name}</span>
                        }
                    })
            }}
        </button>
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_ids = create_memo(move |_| {
        runtime
            .state
            .with(|registry| registry.opened_apps().iter().map(|w| w.id).collect::<Vec<_>>())
    });

    view! {
        <nav class="taskbar" aria-label="Taskbar">
            <div class="taskbar-windows" role="toolbar">
                <For each=move || window_ids.get() key=|id| *id let:window_id>
                    <TaskbarWindowButton window_id=window_id />
                </For>
            </div>
            <button
                type="button"
                class="taskbar-close-all"
                disabled=move || window_ids.with(|ids| ids.is_empty())
                on:click=move |_| runtime.close_all_apps()
            >
                "Close all"
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reducer::reduce_registry;

    fn apply_toggle(registry: &mut WindowRegistry, window_id: WindowId) {
        for action in taskbar_toggle_actions(registry, window_id) {
            reduce_registry(registry, action);
        }
    }

    fn open(registry: &mut WindowRegistry, kind: AppKind) -> WindowId {
        reduce_registry(registry, WindowAction::OpenApp { kind });
        registry.opened_apps().last().expect("window").id
    }

    #[test]
    fn toggle_minimizes_focused_window() {
        let mut registry = WindowRegistry::new();
        let win = open(&mut registry, AppKind::Calculator);

        assert_eq!(
            taskbar_toggle_actions(&registry, win),
            vec![WindowAction::SetIsMinimize {
                window_id: win,
                value: true
            }]
        );
        apply_toggle(&mut registry, win);
        assert!(registry.window(win).expect("window").is_minimize);
        assert_eq!(registry.focused_window_id(), None);
    }

    #[test]
    fn toggle_brings_unfocused_window_to_front_without_minimizing() {
        let mut registry = WindowRegistry::new();
        let calc = open(&mut registry, AppKind::Calculator);
        let tasks = open(&mut registry, AppKind::Tasks);

        apply_toggle(&mut registry, calc);
        let record = registry.window(calc).expect("window");
        assert!(!record.is_minimize);
        assert_eq!(record.z_index, 3);
        assert_eq!(registry.focused_window_id(), Some(calc));
        assert!(!registry.window(tasks).expect("window").is_minimize);
    }

    #[test]
    fn toggle_on_unknown_window_does_nothing() {
        let registry = WindowRegistry::new();
        assert!(taskbar_toggle_actions(&registry, WindowId(5)).is_empty());
    }

    #[test]
    fn calculator_and_tasks_session_follows_taskbar_flow() {
        let mut registry = WindowRegistry::new();

        let calc = open(&mut registry, AppKind::Calculator);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.window(calc).expect("calc").z_index, 1);
        assert_eq!(registry.focused_window_id(), Some(calc));

        let tasks = open(&mut registry, AppKind::Tasks);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.window(tasks).expect("tasks").z_index, 2);
        assert_eq!(registry.focused_window_id(), Some(tasks));

        reduce_registry(
            &mut registry,
            WindowAction::SetIsMinimize {
                window_id: calc,
                value: true,
            },
        );
        assert!(registry.window(calc).expect("calc").is_minimize);
        assert_eq!(registry.focused_window_id(), Some(tasks));

        apply_toggle(&mut registry, calc);
        let record = registry.window(calc).expect("calc");
        assert!(!record.is_minimize);
        assert_eq!(record.z_index, 3);
        assert_eq!(registry.focused_window_id(), Some(calc));
        assert!(!registry.is_focused(tasks));

        apply_toggle(&mut registry, calc);
        assert!(registry.window(calc).expect("calc").is_minimize);
        assert_eq!(registry.focused_window_id(), None);
    }
}
