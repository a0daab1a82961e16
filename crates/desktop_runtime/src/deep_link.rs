//! URL-driven boot instructions (`?open=calculator,tasks`).

use crate::model::{AppKind, AppKindParseError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeepLinkState {
    pub open: Vec<AppKind>,
    pub rejected: Vec<AppKindParseError>,
}

/// Parses a location search string. Every `open` parameter is a comma-separated list of app keys.
pub fn parse_deep_link(search: &str) -> DeepLinkState {
    let mut state = DeepLinkState::default();
    let query = search.strip_prefix('?').unwrap_or(search);

    for pair in query.split('&') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        if name != "open" {
            continue;
        }
        for key in value.split(',').filter(|key| !key.trim().is_empty()) {
            match key.parse::<AppKind>() {
                Ok(kind) => state.open.push(kind),
                Err(err) => state.rejected.push(err),
            }
        }
    }

    state
}

/// Reads the deep link from the browser location, if any.
#[cfg(target_arch = "wasm32")]
pub fn current_deep_link() -> DeepLinkState {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .map(|search| parse_deep_link(&search))
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_deep_link() -> DeepLinkState {
    DeepLinkState::default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_comma_separated_and_repeated_open_params() {
        let state = parse_deep_link("?open=calculator,tasks&theme=dark&open=other-app");
        assert_eq!(
            state.open,
            vec![AppKind::Calculator, AppKind::Tasks, AppKind::OtherApp]
        );
        assert!(state.rejected.is_empty());
    }

    #[test]
    fn collects_unknown_keys_without_dropping_valid_ones() {
        let state = parse_deep_link("open=paint,,tasks");
        assert_eq!(state.open, vec![AppKind::Tasks]);
        assert_eq!(state.rejected, vec![AppKindParseError("paint".to_string())]);
    }

    #[test]
    fn empty_or_unrelated_query_opens_nothing() {
        assert_eq!(parse_deep_link(""), DeepLinkState::default());
        assert_eq!(parse_deep_link("?foo=bar&open"), DeepLinkState::default());
    }
}
