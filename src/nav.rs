#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ENTRIES: [NavEntry; 3] = [
    NavEntry {
        path: "/",
        label: "Home",
    },
    NavEntry {
        path: "/blog",
        label: "Blog",
    },
    NavEntry {
        path: "/contact",
        label: "Contact",
    },
];

/// Home only matches itself, every other entry matches its whole subtree.
pub fn is_active(entry_path: &str, pathname: &str) -> bool {
    if entry_path == "/" {
        pathname == "/"
    } else {
        pathname.starts_with(entry_path)
    }
}

const MOBILE_MAX_WIDTH: f64 = 768.0;
const TABLET_MAX_WIDTH: f64 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Tablet,
    Desktop,
}

impl Viewport {
    pub fn from_width(width: f64) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_is_only_active_at_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/blog"));
        assert!(!is_active("/", "/contact"));
    }

    #[test]
    fn test_sections_match_subpaths() {
        assert!(is_active("/blog", "/blog"));
        assert!(is_active("/blog", "/blog/some-post"));
        assert!(!is_active("/blog", "/"));
        assert!(!is_active("/contact", "/blog"));

        let active = NAV_ENTRIES
            .iter()
            .filter(|e| is_active(e.path, "/contact"))
            .map(|e| e.label)
            .collect::<Vec<_>>();
        assert_eq!(active, vec!["Contact"]);
    }

    #[test]
    fn test_viewport_breakpoints() {
        assert_eq!(Viewport::from_width(375.0), Viewport::Mobile);
        assert_eq!(Viewport::from_width(768.0), Viewport::Mobile);
        assert_eq!(Viewport::from_width(769.0), Viewport::Tablet);
        assert_eq!(Viewport::from_width(1024.0), Viewport::Tablet);
        assert_eq!(Viewport::from_width(1025.0), Viewport::Desktop);
        assert!(Viewport::from_width(500.0).is_mobile());
    }
}
