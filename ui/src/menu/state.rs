use std::collections::BTreeMap;

use crate::nav::{NavId, NavItem, expandable_ids};

/// Open/closed flags of the overlay and of every expandable item.
///
/// The submenu map only ever holds ids of items that have children, and
/// all of them collapse whenever the overlay closes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
    submenus: BTreeMap<NavId, bool>,
}

impl MenuState {
    pub fn new(items: &[NavItem]) -> Self {
        Self {
            is_open: false,
            submenus: expandable_ids(items).into_iter().map(|id| (id, false)).collect(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.submenus.values_mut().for_each(|expanded| *expanded = false);
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Flips one submenu. Returns `false` if `id` has no submenu.
    pub fn toggle_submenu(&mut self, id: NavId) -> bool {
        match self.submenus.get_mut(&id) {
            Some(expanded) => {
                *expanded = !*expanded;
                true
            }
            None => false,
        }
    }

    pub fn is_submenu_open(&self, id: NavId) -> bool {
        self.submenus.get(&id).copied().unwrap_or(false)
    }

    pub fn submenu_ids(&self) -> impl Iterator<Item = NavId> + '_ {
        self.submenus.keys().copied()
    }
}
