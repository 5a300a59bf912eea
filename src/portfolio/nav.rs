use serde::{Deserialize, Serialize};

/// Scroll offset, in pixels, past which the navbar switches to its elevated style.
pub const ELEVATE_AFTER_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    About,
    Projects,
    Contact,
}

impl Anchor {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub anchor: Anchor,
}

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        name: "Home",
        anchor: Anchor::Home,
    },
    NavItem {
        name: "About",
        anchor: Anchor::About,
    },
    NavItem {
        name: "Projects",
        anchor: Anchor::Projects,
    },
    NavItem {
        name: "Contact",
        anchor: Anchor::Contact,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub elevated: bool,
}

impl ScrollState {
    pub fn from_offset(y: f64) -> Self {
        Self {
            elevated: y > ELEVATE_AFTER_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    pub open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Picking an entry always closes the menu; the caller scrolls to the returned anchor.
    pub fn select(&mut self, item: &NavItem) -> Anchor {
        self.open = false;
        item.anchor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Root class consumed by the `dark:` variant.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "",
        }
    }

    /// Icon for the toggle button: offers the other theme.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!ScrollState::from_offset(0.0).elevated);
        assert!(!ScrollState::from_offset(50.0).elevated);
        assert!(ScrollState::from_offset(50.5).elevated);
    }

    #[test]
    fn test_scroll_down_and_back() {
        let down = ScrollState::from_offset(60.0);
        assert!(down.elevated);
        let back = ScrollState::from_offset(0.0);
        assert!(!back.elevated);
    }

    #[test]
    fn test_menu_select_closes() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.open);

        let projects = NAV_ITEMS
            .iter()
            .find(|i| i.name == "Projects")
            .expect("Projects should be in the nav");
        let anchor = menu.select(projects);
        assert!(!menu.open);
        assert_eq!(anchor.href(), "#projects");
    }

    #[test]
    fn test_menu_select_when_closed_stays_closed() {
        let mut menu = MobileMenu::default();
        let anchor = menu.select(&NAV_ITEMS[0]);
        assert!(!menu.open);
        assert_eq!(anchor, Anchor::Home);
    }

    #[test]
    fn test_menu_toggle_twice() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.toggle();
        assert!(!menu.open);
    }

    #[test]
    fn test_anchor_ids() {
        let ids = NAV_ITEMS.iter().map(|i| i.anchor.id()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["home", "about", "projects", "contact"]);
    }

    #[test]
    fn test_theme_toggle() {
        let theme = Theme::default();
        assert!(!theme.is_dark());
        let theme = theme.toggle();
        assert!(theme.is_dark());
        assert_eq!(theme.class(), "dark");
        assert_eq!(theme.toggle(), Theme::Light);
    }

    #[test]
    fn test_theme_serde() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let t: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(t, Theme::Light);
    }
}
