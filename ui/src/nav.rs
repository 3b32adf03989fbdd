use std::fmt;

/// Stable identifier of a navigation item, unique across the whole tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavId(&'static str);

impl NavId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for NavId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub url: &'static str,
    pub id: NavId,
    pub subitems: Option<Vec<NavItem>>,
}

/// How an item is rendered inside the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Link,
    Submenu,
}

impl NavItem {
    fn link(title: &'static str, url: &'static str, id: &'static str) -> Self {
        Self { title, url, id: NavId::new(id), subitems: None }
    }

    fn group(title: &'static str, url: &'static str, id: &'static str, subitems: Vec<NavItem>) -> Self {
        Self { title, url, id: NavId::new(id), subitems: Some(subitems) }
    }

    /// Children of this item, empty for plain links.
    pub fn children(&self) -> &[NavItem] {
        self.subitems.as_deref().unwrap_or(&[])
    }

    pub fn kind(&self) -> ItemKind {
        if self.children().is_empty() {
            ItemKind::Link
        } else {
            ItemKind::Submenu
        }
    }
}

pub fn navigation_items() -> Vec<NavItem> {
    vec![
        NavItem::link("Home", "#", "home"),
        NavItem::group(
            "About",
            "#",
            "about",
            vec![
                NavItem::link("About 1", "#", "about-1"),
                NavItem::link("About 2", "#", "about-2"),
                NavItem::link("About 3", "#", "about-3"),
            ],
        ),
        NavItem::link("Contact", "#", "contact"),
    ]
}

/// Ids of the top-level items that open a submenu.
pub fn expandable_ids(items: &[NavItem]) -> Vec<NavId> {
    items
        .iter()
        .filter(|item| item.kind() == ItemKind::Submenu)
        .map(|item| item.id)
        .collect()
}
