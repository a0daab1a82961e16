//! Window registry, app factory and Leptos desktop shell for the browser window simulator.

pub mod apps;
pub mod components;
pub mod config;
pub mod deep_link;
mod effect_executor;
pub mod icons;
pub mod model;
pub mod reducer;
mod runtime_context;
mod window_manager;

pub use apps::{app_metadata, create_app, AppMetadata};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ShellConfig, ShellConfigError};
pub use icons::IconName;
pub use model::*;
pub use reducer::{reduce_registry, RuntimeEffect, WindowAction};
