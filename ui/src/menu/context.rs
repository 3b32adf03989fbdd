use leptos::logging::log;
use leptos::prelude::{
    GetValue, RwSignal, StoredValue, Update, With, WithUntracked, expect_context,
    provide_context,
};

use crate::menu::MenuState;
use crate::nav::{NavId, NavItem};

/// Menu state shared with everything under `MobileMenu`.
#[derive(Clone, Copy)]
pub struct MenuContext {
    state: RwSignal<MenuState>,
    items: StoredValue<Vec<NavItem>>,
}

impl MenuContext {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            state: RwSignal::new(MenuState::new(&items)),
            items: StoredValue::new(items),
        }
    }

    pub fn items(&self) -> Vec<NavItem> {
        self.items.get_value()
    }

    /// Reactive.
    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    /// For event handlers, where nothing should subscribe.
    pub fn is_open_untracked(&self) -> bool {
        self.state.with_untracked(|s| s.is_open())
    }

    /// Reactive.
    pub fn submenu_open(&self, id: NavId) -> bool {
        self.state.with(|s| s.is_submenu_open(id))
    }

    pub fn open_menu(&self) {
        self.state.update(|s| s.open());
    }

    pub fn close_menu(&self) {
        self.state.update(|s| s.close());
    }

    pub fn toggle_menu(&self) {
        self.state.update(|s| {
            s.toggle();
            log!("mobile menu {}", if s.is_open() { "opened" } else { "closed" });
        });
    }

    pub fn toggle_submenu(&self, id: NavId) {
        self.state.update(|s| {
            if !s.toggle_submenu(id) {
                log!("ignoring submenu toggle for leaf item {id}");
            }
        });
    }
}

pub fn provide_menu_context(items: Vec<NavItem>) -> MenuContext {
    let ctx = MenuContext::new(items);
    provide_context(ctx);
    ctx
}

pub fn use_menu_context() -> MenuContext {
    expect_context::<MenuContext>()
}
