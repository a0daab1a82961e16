//! App factory and per-kind view dispatch.

mod placeholders;

use desktop_app_calculator::CalculatorApp;
use desktop_app_tasks::TasksApp;
use leptos::*;

use crate::{
    icons::{app_icon, IconName},
    model::{AppKind, MinSize, WindowEntity, WindowId},
};

/// Presentation metadata fixed per [`AppKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppMetadata {
    pub icon_src: IconName,
    pub display_name: &'static str,
    pub min_size: MinSize,
}

pub fn app_metadata(kind: AppKind) -> AppMetadata {
    match kind {
        AppKind::Calculator => AppMetadata {
            icon_src: app_icon(AppKind::Calculator),
            display_name: "Calculator",
            min_size: MinSize {
                width: "420px",
                height: "600px",
            },
        },
        AppKind::Tasks => AppMetadata {
            icon_src: app_icon(AppKind::Tasks),
            display_name: "Tasks",
            min_size: MinSize {
                width: "600px",
                height: "420px",
            },
        },
        AppKind::OtherApp => AppMetadata {
            icon_src: app_icon(AppKind::OtherApp),
            display_name: "Other App",
            min_size: MinSize {
                width: "420px",
                height: "100px",
            },
        },
    }
}

/// Builds a fresh, unfocused-by-default window entity for `kind`.
pub fn create_app(kind: AppKind, id: WindowId, z_index: u32) -> WindowEntity {
    let AppMetadata {
        icon_src,
        display_name,
        min_size,
    } = app_metadata(kind);
    WindowEntity {
        id,
        kind,
        is_fullscreen: false,
        is_minimize: false,
        z_index,
        display_name,
        icon_src,
        min_size,
    }
}

pub fn render_window_contents(window: &WindowEntity) -> View {
    match window.kind {
        AppKind::Calculator => view! { <CalculatorApp /> }.into_view(),
        AppKind::Tasks => view! { <TasksApp /> }.into_view(),
        AppKind::OtherApp => placeholders::render_other_app_placeholder(),
    }
}
