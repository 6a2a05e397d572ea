//! Route table of the admin console.
//!
//! Every route lives under [`BASE_PATH`]. Paths are always absolute; a
//! navigation segment `devices` resolves to `/admin/devices`.

use serde::{Deserialize, Serialize};

/// Path prefix the console is mounted under.
pub const BASE_PATH: &str = "/admin";

/// A client-side route of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminRoute {
    Login,
    Dashboard,
    Devices,
    Settings,
    ColorPalette,
}

impl AdminRoute {
    /// Every route, login first.
    pub const ALL: [AdminRoute; 5] = [
        AdminRoute::Login,
        AdminRoute::Dashboard,
        AdminRoute::Devices,
        AdminRoute::Settings,
        AdminRoute::ColorPalette,
    ];

    /// Segment relative to [`BASE_PATH`]. Empty for the dashboard.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Dashboard => "",
            Self::Devices => "devices",
            Self::Settings => "settings",
            Self::ColorPalette => "color",
        }
    }

    /// Canonical absolute path, e.g. `/admin/devices`.
    #[must_use]
    pub fn path(self) -> String {
        join(self.segment())
    }

    /// Title shown in the top bar (or the document title for login).
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "登录",
            Self::Dashboard => "仪表盘",
            Self::Devices => "设备列表",
            Self::Settings => "设置",
            Self::ColorPalette => "色卡",
        }
    }

    /// Whether the route renders inside the shell (top bar + sidebar).
    ///
    /// Login is the only route isolated from the shell.
    #[must_use]
    pub const fn uses_shell(self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Resolve an absolute location path to a route.
    ///
    /// `/admin` and `/admin/` are the dashboard. Other routes tolerate one
    /// trailing slash. Anything else, paths outside the base included,
    /// yields `None`.
    #[must_use]
    pub fn resolve(path: &str) -> Option<Self> {
        let rest = path.strip_prefix(BASE_PATH)?;
        let segment = match rest {
            "" | "/" => "",
            _ => {
                let rest = rest.strip_prefix('/')?;
                rest.strip_suffix('/').unwrap_or(rest)
            }
        };
        if rest.len() > 1 && segment.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|route| route.segment() == segment)
    }

    /// Canonical path to replace `path` with, when `path` is an alias of a
    /// route (`/admin`, `/admin/devices/`). `None` for canonical or unknown
    /// paths.
    #[must_use]
    pub fn canonical_redirect(path: &str) -> Option<String> {
        let canonical = Self::resolve(path)?.path();
        (canonical != path).then_some(canonical)
    }
}

/// Join a segment onto [`BASE_PATH`].
#[must_use]
pub fn join(segment: &str) -> String {
    format!("{BASE_PATH}/{segment}")
}
