use std::{fmt, rc::Rc, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons::IconName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of application kinds the factory and dispatcher know how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppKind {
    Calculator,
    Tasks,
    OtherApp,
}

impl AppKind {
    pub const ALL: [AppKind; 3] = [Self::Calculator, Self::Tasks, Self::OtherApp];

    /// Stable string key used by config files and deep links.
    pub fn key(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::Tasks => "tasks",
            Self::OtherApp => "other-app",
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown app kind `{0}`")]
pub struct AppKindParseError(pub String);

impl FromStr for AppKind {
    type Err = AppKindParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| AppKindParseError(key.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinSize {
    pub width: &'static str,
    pub height: &'static str,
}

/// One open simulated application window.
///
/// Entities are never mutated after construction; registry transitions build a replacement
/// value and swap it into the open list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEntity {
    pub id: WindowId,
    pub kind: AppKind,
    pub is_fullscreen: bool,
    pub is_minimize: bool,
    pub z_index: u32,
    pub display_name: &'static str,
    pub icon_src: IconName,
    pub min_size: MinSize,
}

impl WindowEntity {
    pub fn with_z_index(&self, z_index: u32) -> Self {
        Self {
            z_index,
            ..self.clone()
        }
    }

    pub fn with_minimize(&self, is_minimize: bool) -> Self {
        Self {
            is_minimize,
            ..self.clone()
        }
    }

    pub fn with_fullscreen(&self, is_fullscreen: bool) -> Self {
        Self {
            is_fullscreen,
            ..self.clone()
        }
    }
}

/// Authoritative window state: the open list (insertion order) and the focused window.
///
/// Fields are only writable from inside the crate through [`crate::reduce_registry`]; other
/// crates read through the accessors below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegistry {
    pub(crate) next_window_id: u64,
    pub(crate) opened_apps: Vec<Rc<WindowEntity>>,
    pub(crate) focused_window_id: Option<WindowId>,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            opened_apps: Vec::new(),
            focused_window_id: None,
        }
    }
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened_apps(&self) -> &[Rc<WindowEntity>] {
        &self.opened_apps
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.focused_window_id
    }

    pub fn window(&self, window_id: WindowId) -> Option<&Rc<WindowEntity>> {
        self.opened_apps.iter().find(|w| w.id == window_id)
    }

    pub fn is_focused(&self, window_id: WindowId) -> bool {
        self.focused_window_id == Some(window_id)
    }

    pub fn len(&self) -> usize {
        self.opened_apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opened_apps.is_empty()
    }

    /// Largest z-index among open windows, or `0` when nothing is open.
    pub fn biggest_z_index(&self) -> u32 {
        self.opened_apps
            .iter()
            .map(|w| w.z_index)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_kind_parses_keys_case_insensitively() {
        assert_eq!("calculator".parse::<AppKind>(), Ok(AppKind::Calculator));
        assert_eq!(" Tasks ".parse::<AppKind>(), Ok(AppKind::Tasks));
        assert_eq!("other-app".parse::<AppKind>(), Ok(AppKind::OtherApp));
        assert_eq!(
            "paint".parse::<AppKind>(),
            Err(AppKindParseError("paint".to_string()))
        );
    }

    #[test]
    fn app_kind_keys_round_trip_through_display() {
        for kind in AppKind::ALL {
            assert_eq!(kind.to_string().parse::<AppKind>(), Ok(kind));
        }
    }

    #[test]
    fn empty_registry_has_zero_biggest_z_index() {
        let registry = WindowRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.biggest_z_index(), 0);
        assert_eq!(registry.focused_window_id(), None);
    }
}
