//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived registry container, the runtime effect queue and boot-time
//! window opening. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    config::ShellConfig,
    deep_link, effect_executor,
    model::{AppKind, WindowId, WindowRegistry},
    reducer::{reduce_registry, RuntimeEffect, WindowAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading window state and dispatching [`WindowAction`] values.
///
/// Consumers get a read-only registry signal; every write goes through the action methods.
pub struct DesktopRuntimeContext {
    /// Reactive, read-only registry snapshot.
    pub state: Signal<WindowRegistry>,
    /// Shell configuration loaded at mount.
    pub config: StoredValue<ShellConfig>,
    pub(crate) effects: RwSignal<Vec<RuntimeEffect>>,
    dispatch: Callback<WindowAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a registry action through the runtime context callback.
    pub fn dispatch_action(&self, action: WindowAction) {
        self.dispatch.call(action);
    }

    pub fn open_app(&self, kind: AppKind) {
        self.dispatch_action(WindowAction::OpenApp { kind });
    }

    pub fn close_app(&self, window_id: WindowId) {
        self.dispatch_action(WindowAction::CloseApp { window_id });
    }

    pub fn close_all_apps(&self) {
        self.dispatch_action(WindowAction::CloseAllApps);
    }

    pub fn set_is_minimize(&self, window_id: WindowId, value: bool) {
        self.dispatch_action(WindowAction::SetIsMinimize { window_id, value });
    }

    pub fn set_is_fullscreen(&self, window_id: WindowId, value: bool) {
        self.dispatch_action(WindowAction::SetIsFullscreen { window_id, value });
    }

    pub fn focus(&self, window_id: Option<WindowId>) {
        self.dispatch_action(WindowAction::Focus { window_id });
    }
}

fn install_boot_open(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        for kind in runtime.config.get_value().boot_open {
            runtime.open_app(kind);
        }

        let deep_link = deep_link::current_deep_link();
        for err in &deep_link.rejected {
            logging::warn!("deep link skipped: {err}");
        }
        for kind in deep_link.open {
            runtime.open_app(kind);
        }
    });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and opens boot windows.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let registry = create_rw_signal(WindowRegistry::new());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let config = store_value(ShellConfig::load());

    let dispatch = Callback::new(move |action: WindowAction| {
        let mut next = registry.get_untracked();
        let new_effects = reduce_registry(&mut next, action);

        if registry.with_untracked(|current| *current == next) {
            logging::debug_warn!("window action left registry unchanged: {action:?}");
        } else {
            registry.set(next);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        state: registry.read_only().into(),
        config,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    install_boot_open(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
