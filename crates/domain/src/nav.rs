//! Sidebar navigation items.

use crate::route::{self, AdminRoute};

/// A single sidebar destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Display text.
    pub label: &'static str,
    /// Route segment relative to [`route::BASE_PATH`].
    pub path: &'static str,
}

impl NavItem {
    /// Resolved absolute href, e.g. `/admin/devices`.
    #[must_use]
    pub fn href(&self) -> String {
        route::join(self.path)
    }

    /// An item is active only when its href equals the location exactly.
    #[must_use]
    pub fn is_active(&self, location: &str) -> bool {
        self.href() == location
    }

    /// The route this item navigates to.
    #[must_use]
    pub fn route(&self) -> Option<AdminRoute> {
        AdminRoute::resolve(&self.href())
    }
}

/// Sidebar entries, top to bottom.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "仪表盘",
        path: "",
    },
    NavItem {
        label: "设备列表",
        path: "devices",
    },
    NavItem {
        label: "设置",
        path: "settings",
    },
    NavItem {
        label: "色卡",
        path: "color",
    },
];

/// Index of the item matching `location`, if any.
#[must_use]
pub fn active_index(location: &str) -> Option<usize> {
    NAV_ITEMS.iter().position(|item| item.is_active(location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mark_exactly_one_item_active_on_its_own_href() {
        for (idx, item) in NAV_ITEMS.iter().enumerate() {
            let location = item.href();
            let active: Vec<_> = NAV_ITEMS
                .iter()
                .filter(|other| other.is_active(&location))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active_index(&location), Some(idx));
        }
    }

    #[test]
    fn should_mark_no_item_active_on_unknown_location() {
        assert_eq!(active_index("/admin/login"), None);
        assert_eq!(active_index("/admin/unknown"), None);
        assert_eq!(active_index("/devices"), None);
    }

    #[test]
    fn should_not_use_prefix_matching() {
        assert_eq!(active_index("/admin/devices/42"), None);
        assert_eq!(active_index("/admin/devices/"), None);
    }

    #[test]
    fn should_resolve_dashboard_href_with_trailing_slash() {
        assert_eq!(NAV_ITEMS[0].href(), "/admin/");
        let landed = AdminRoute::canonical_redirect("/admin").unwrap();
        assert_eq!(active_index(&landed), Some(0));
    }

    #[test]
    fn should_activate_exactly_one_item_once_aliases_are_canonicalised() {
        let aliases = [
            "/admin",
            "/admin/",
            "/admin/devices/",
            "/admin/settings/",
            "/admin/color/",
        ];
        for alias in aliases {
            let location = AdminRoute::canonical_redirect(alias).unwrap_or_else(|| alias.to_owned());
            let active = NAV_ITEMS
                .iter()
                .filter(|item| item.is_active(&location))
                .count();
            assert_eq!(active, 1, "alias {alias} landed on {location}");
        }
    }

    #[test]
    fn should_have_unique_hrefs() {
        let mut hrefs: Vec<_> = NAV_ITEMS.iter().map(NavItem::href).collect();
        hrefs.sort();
        hrefs.dedup();
        assert_eq!(hrefs.len(), NAV_ITEMS.len());
    }

    #[test]
    fn should_point_every_item_at_a_shell_route() {
        for item in NAV_ITEMS {
            let route = item.route().expect("nav item should resolve");
            assert!(route.uses_shell());
        }
    }
}
