use leptos::ev::keydown;
use leptos::html;
use leptos::leptos_dom::helpers::request_animation_frame;
use leptos::logging::warn;
use leptos::prelude::ClassAttribute;
use leptos::prelude::CustomAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::NodeRef;
use leptos::prelude::NodeRefAttribute;
use leptos::prelude::StyleAttribute;
use leptos::prelude::{Effect, Get, GetUntracked, RwSignal, Set, Signal, on_cleanup};
use leptos::{IntoView, component, view};
use leptos_use::{use_document, use_event_listener, use_media_query};
use web_sys::KeyboardEvent;

use crate::components::menu_items::MobileMenuItems;
use crate::components::menu_toggle::MenuToggle;
use crate::dom::{focus_first, focus_target, set_scroll_locked, trap_focus, viewport_height};
use crate::menu::{provide_menu_context, use_menu_context};
use crate::motion::Variant;
use crate::motion::variants::{DEFAULT_VIEWPORT_HEIGHT, container_style};
use crate::nav::navigation_items;

/// Width from which the inline desktop links replace the overlay.
pub const DESKTOP_QUERY: &str = "(min-width: 768px)";

#[component]
pub fn MobileMenu() -> impl IntoView {
    provide_menu_context(navigation_items());

    view! { <MobileMenuOverlay/> }
}

#[component]
fn MobileMenuOverlay() -> impl IntoView {
    let menu = use_menu_context();
    let container: NodeRef<html::Div> = NodeRef::new();
    let radius_base = RwSignal::new(DEFAULT_VIEWPORT_HEIGHT);

    Effect::new(move |_| {
        let open = menu.is_open();
        if open {
            if let Some(h) = viewport_height() {
                radius_base.set(h);
            }
        }
        if let Err(e) = set_scroll_locked(open) {
            warn!("scroll lock: {e:#}");
        }
    });
    on_cleanup(|| {
        if let Err(e) = set_scroll_locked(false) {
            warn!("scroll unlock: {e:#}");
        }
    });

    // into the list on open, back to the toggle on close
    Effect::new(move |was_open: Option<bool>| {
        let open = menu.is_open();
        if let Some(target) = focus_target(was_open, open) {
            // items mount in the presence effect, one frame later is safe
            request_animation_frame(move || {
                let Some(el) = container.get_untracked() else {
                    return;
                };
                match focus_first(&el, &target.selector()) {
                    Ok(true) => {}
                    Ok(false) => warn!("nothing to focus for {target:?}"),
                    Err(e) => warn!("focus move: {e:#}"),
                }
            });
        }
        open
    });

    let is_desktop = use_media_query(DESKTOP_QUERY);
    Effect::new(move |_| {
        if is_desktop.get() && menu.is_open_untracked() {
            menu.close_menu();
        }
    });

    let _ = use_event_listener(use_document(), keydown, move |ev: KeyboardEvent| {
        if !menu.is_open_untracked() {
            return;
        }
        match ev.key().as_str() {
            "Escape" => menu.close_menu(),
            "Tab" => {
                if let Some(el) = container.get_untracked() {
                    if let Err(e) = trap_focus(&el, &ev) {
                        warn!("focus trap: {e:#}");
                    }
                }
            }
            _ => {}
        }
    });

    let variant = move || Variant::from_open(menu.is_open());

    view! {
        <div
            node_ref=container
            class="absolute inset-0 bg-black"
            data-state=move || variant().name()
            style=move || container_style(variant(), radius_base.get())
        >
            <div class="absolute flex right-3 top-3 -mt-0.5">
                <MenuToggle
                    open=Signal::derive(move || menu.is_open())
                    on_toggle=move |_| menu.toggle_menu()
                />
            </div>
            <MobileMenuItems/>
        </div>
    }
}
