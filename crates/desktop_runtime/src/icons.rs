//! Inline SVG icon catalog for the desktop shell.
//!
//! Icons are rendered from path data compiled into the binary, so the shell needs no static
//! asset directory. App and window-control glyphs follow Fluent UI System Icons (regular
//! 24px); the task list glyph is drawn on the same grid.

use leptos::*;

use crate::model::AppKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Calculator app icon.
    Calculator,
    /// Task list app icon.
    TaskList,
    /// Generic application icon used by the placeholder app.
    AppGeneric,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Window restore control.
    WindowRestore,
    /// Close control.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::TaskList => "task-list",
            Self::AppGeneric => "app-generic",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Calculator => {
                r#"<path d="M7.75 5C6.78 5 6 5.78 6 6.75v1c0 .97.78 1.75 1.75 1.75h5.5c.97 0 1.75-.78 1.75-1.75v-1C15 5.78 14.22 5 13.25 5h-5.5ZM7.5 6.75c0-.14.11-.25.25-.25h5.5c.14 0 .25.11.25.25v1c0 .14-.11.25-.25.25h-5.5a.25.25 0 0 1-.25-.25v-1Zm3 4a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5ZM9.25 15.5a1.25 1.25 0 1 1 2.5 0 1.25 1.25 0 0 1-2.5 0ZM7 10.75a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5ZM5.75 15.5a1.25 1.25 0 1 1 2.5 0 1.25 1.25 0 0 1-2.5 0ZM14 10.75a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5Zm-1.25 4.75a1.25 1.25 0 1 1 2.5 0 1.25 1.25 0 0 1-2.5 0ZM6.14 2A3.14 3.14 0 0 0 3 5.14v11.22c0 1.74 1.4 3.14 3.14 3.14h8.72c1.74 0 3.14-1.4 3.14-3.14V5.14C18 3.4 16.6 2 14.86 2H6.14ZM4.5 5.14c0-.9.73-1.64 1.64-1.64h8.72c.9 0 1.64.73 1.64 1.64v11.22c0 .9-.73 1.64-1.64 1.64H6.14c-.9 0-1.64-.73-1.64-1.64V5.14Z"/>"#
            }
            Self::TaskList => {
                r#"<path d="M4.25 5.5h1.5c.41 0 .75.34.75.75v1.5c0 .41-.34.75-.75.75h-1.5a.75.75 0 0 1-.75-.75v-1.5c0-.41.34-.75.75-.75Zm0 5h1.5c.41 0 .75.34.75.75v1.5c0 .41-.34.75-.75.75h-1.5a.75.75 0 0 1-.75-.75v-1.5c0-.41.34-.75.75-.75Zm0 5h1.5c.41 0 .75.34.75.75v1.5c0 .41-.34.75-.75.75h-1.5a.75.75 0 0 1-.75-.75v-1.5c0-.41.34-.75.75-.75ZM9.25 6.25h10.5a.75.75 0 0 1 0 1.5H9.25a.75.75 0 0 1 0-1.5Zm0 5h10.5a.75.75 0 0 1 0 1.5H9.25a.75.75 0 0 1 0-1.5Zm0 5h10.5a.75.75 0 0 1 0 1.5H9.25a.75.75 0 0 1 0-1.5Z"/>"#
            }
            Self::AppGeneric => {
                r#"<path d="M19 6.01c1.68.13 3 1.53 3 3.24v8A4.75 4.75 0 0 1 17.25 22h-8a3.25 3.25 0 0 1-3.24-3h1.51c.12.85.85 1.5 1.73 1.5h8c1.8 0 3.25-1.46 3.25-3.25v-8c0-.88-.65-1.6-1.5-1.73V6.01ZM14.75 2C16.55 2 18 3.46 18 5.25v9.5c0 1.8-1.46 3.25-3.25 3.25h-9.5A3.25 3.25 0 0 1 2 14.75v-9.5C2 3.45 3.46 2 5.25 2h9.5ZM3.5 14.75c0 .97.78 1.75 1.75 1.75h9.5c.97 0 1.75-.78 1.75-1.75V7.5h-13v7.25ZM5.25 3.5c-.97 0-1.75.78-1.75 1.75V6h13v-.75c0-.97-.78-1.75-1.75-1.75h-9.5Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

/// Icon shown for `kind` on the desktop, in the title bar and on the taskbar.
pub const fn app_icon(kind: AppKind) -> IconName {
    match kind {
        AppKind::Calculator => IconName::Calculator,
        AppKind::Tasks => IconName::TaskList,
        AppKind::OtherApp => IconName::AppGeneric,
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standard shell icon sizes.
pub enum IconSize {
    /// 16px, taskbar and window controls.
    #[default]
    Sm,
    /// 20px, title bars.
    Md,
    /// 32px, desktop launchers.
    Lg,
}

impl IconSize {
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders a catalog icon as inline SVG.
pub fn ShellIcon(
    icon: IconName,
    #[prop(default = IconSize::Sm)] size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_app_kind_resolves_to_its_own_inline_icon() {
        let icons: HashSet<_> = AppKind::ALL.into_iter().map(app_icon).collect();
        assert_eq!(icons.len(), AppKind::ALL.len());

        for kind in AppKind::ALL {
            let body = app_icon(kind).svg_body();
            assert!(body.starts_with("<path d=\""), "{kind}: {body}");
            assert!(body.ends_with("\"/>"), "{kind}: {body}");
        }
    }

    #[test]
    fn tokens_are_unique() {
        let all = [
            IconName::Calculator,
            IconName::TaskList,
            IconName::AppGeneric,
            IconName::WindowMinimize,
            IconName::WindowMaximize,
            IconName::WindowRestore,
            IconName::Dismiss,
        ];
        let tokens: HashSet<_> = all.into_iter().map(IconName::token).collect();
        assert_eq!(tokens.len(), all.len());
    }
}
