//! Registry actions, side-effect intents, and transition logic for the window registry.

use crate::{
    model::{AppKind, WindowId, WindowRegistry},
    window_manager::{push_new_window, raise_window, replace_window},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by [`reduce_registry`] to mutate [`WindowRegistry`].
pub enum WindowAction {
    /// Create a window for `kind` and focus it.
    OpenApp {
        /// Application to open.
        kind: AppKind,
    },
    /// Remove a window by id.
    CloseApp {
        /// Window to close.
        window_id: WindowId,
    },
    /// Remove every open window.
    CloseAllApps,
    /// Set or clear the minimized flag.
    SetIsMinimize {
        /// Target window.
        window_id: WindowId,
        /// New flag value.
        value: bool,
    },
    /// Set or clear the fullscreen flag.
    SetIsFullscreen {
        /// Target window.
        window_id: WindowId,
        /// New flag value.
        value: bool,
    },
    /// Focus and raise a window, or clear focus with `None`.
    Focus {
        /// Window to focus.
        window_id: Option<WindowId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_registry`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move DOM focus into the newly focused window.
    FocusWindowInput(WindowId),
}

/// Applies a [`WindowAction`] to the registry and collects resulting side effects.
///
/// Every action is total: ids that are not open are ignored and yield no effects.
pub fn reduce_registry(registry: &mut WindowRegistry, action: WindowAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        WindowAction::OpenApp { kind } => {
            // Created at max + 1, so it is already on top and only needs focus.
            let window_id = push_new_window(registry, kind);
            registry.focused_window_id = Some(window_id);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        WindowAction::CloseApp { window_id } => {
            registry.opened_apps.retain(|w| w.id != window_id);
            if registry.focused_window_id == Some(window_id) {
                registry.focused_window_id = None;
            }
        }
        WindowAction::CloseAllApps => {
            registry.opened_apps.clear();
            registry.focused_window_id = None;
        }
        WindowAction::SetIsMinimize { window_id, value } => {
            let changed = replace_window(registry, window_id, |w| w.with_minimize(value));
            if changed && value && registry.focused_window_id == Some(window_id) {
                registry.focused_window_id = None;
            }
        }
        WindowAction::SetIsFullscreen { window_id, value } => {
            replace_window(registry, window_id, |w| w.with_fullscreen(value));
        }
        WindowAction::Focus {
            window_id: Some(window_id),
        } => {
            if focus_window_internal(registry, window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        WindowAction::Focus { window_id: None } => {
            registry.focused_window_id = None;
        }
    }
    effects
}

fn focus_window_internal(registry: &mut WindowRegistry, window_id: WindowId) -> bool {
    if !raise_window(registry, window_id) {
        return false;
    }
    let minimized = registry
        .window(window_id)
        .map(|w| w.is_minimize)
        .unwrap_or(false);
    if minimized {
        replace_window(registry, window_id, |w| w.with_minimize(false));
    }
    registry.focused_window_id = Some(window_id);
    true
}
