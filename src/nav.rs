//! Static navigation registry.
//!
//! The menu renderers iterate this data in order; nothing mutates it after
//! compile time.

/// Glyph a child link may carry, rendered by `components::icons::Glyph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Pickaxe,
    Share,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildLinkEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: Option<NavIcon>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLinkEntry {
    pub path: &'static str,
    pub label: &'static str,
    /// Empty slice means the entry renders as a direct link.
    pub children: &'static [ChildLinkEntry],
}

impl NavLinkEntry {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Exact-path match against the router's current pathname.
    pub fn is_active(&self, pathname: &str) -> bool {
        self.path == pathname
    }
}

impl ChildLinkEntry {
    pub fn is_active(&self, pathname: &str) -> bool {
        self.path == pathname
    }
}

/// Top-level menu entries, in display order.
pub const NAV_LINKS: &[NavLinkEntry] = &[
    NavLinkEntry {
        path: "/about",
        label: "About",
        children: &[],
    },
    NavLinkEntry {
        path: "/use-cases",
        label: "Use Cases",
        children: &[
            ChildLinkEntry {
                path: "/miners",
                label: "For Miners",
                icon: Some(NavIcon::Pickaxe),
            },
            ChildLinkEntry {
                path: "/pools",
                label: "For Pool Operators",
                icon: Some(NavIcon::Share),
            },
            ChildLinkEntry {
                path: "/developers",
                label: "For Developers",
                icon: Some(NavIcon::Code),
            },
        ],
    },
    NavLinkEntry {
        path: "/resources",
        label: "Resources",
        children: &[],
    },
    NavLinkEntry {
        path: "/specifications",
        label: "Specifications",
        children: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_order() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec!["About", "Use Cases", "Resources", "Specifications"]
        );
    }

    #[test]
    fn use_cases_children_in_order() {
        let use_cases = NAV_LINKS
            .iter()
            .find(|l| l.path == "/use-cases")
            .expect("use cases entry");
        let labels: Vec<_> = use_cases.children.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec!["For Miners", "For Pool Operators", "For Developers"]
        );
    }

    #[test]
    fn child_lists_are_non_empty_when_present() {
        for link in NAV_LINKS {
            if link.has_children() {
                assert!(!link.children.is_empty());
            } else {
                assert!(link.children.is_empty());
            }
        }
    }

    #[test]
    fn every_child_carries_an_icon_here() {
        // Current registry happens to give each child a glyph; the renderer
        // must still cope with None.
        for link in NAV_LINKS {
            for child in link.children {
                assert!(child.icon.is_some(), "{} lost its icon", child.label);
            }
        }
    }

    #[test]
    fn active_only_on_exact_path() {
        let about = &NAV_LINKS[0];
        assert!(about.is_active("/about"));
        assert!(!about.is_active("/"));
        assert!(!about.is_active("/about/team"));

        let miners = &NAV_LINKS[1].children[0];
        assert!(miners.is_active("/miners"));
        assert!(!miners.is_active("/pools"));
    }
}
