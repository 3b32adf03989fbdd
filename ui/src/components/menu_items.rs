use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::prelude::CustomAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::IntoAny;
use leptos::prelude::OnAttribute;
use leptos::prelude::StyleAttribute;
use leptos::prelude::{Get, Memo, Signal};
use leptos::{IntoView, component, view};

use crate::dom::MENU_ITEMS_ID;
use crate::menu::use_menu_context;
use crate::motion::Variant;
use crate::motion::presence::use_presence;
use crate::motion::variants::{chevron_style, item_style, list_exit_ms, submenu_frame_style};
use crate::nav::{ItemKind, NavId, NavItem};

/// Top-level entries of the overlay. Mounted while the menu is open and
/// for as long as the staggered exit takes afterwards.
#[component]
pub fn MobileMenuItems() -> impl IntoView {
    let menu = use_menu_context();
    let items = menu.items();
    let count = items.len();
    let presence = use_presence(move || menu.is_open(), list_exit_ms(count));
    // variant changes must restyle the list, not rebuild it
    let mounted = Memo::new(move |_| presence.get().is_mounted());

    move || {
        let items = items.clone();
        mounted.get().then(move || {
            let variant = Signal::derive(move || presence.get().variant());
            view! {
                <ul
                    id=MENU_ITEMS_ID
                    class="list-none p-0 m-0 mt-40 px-8"
                    data-state=move || variant.get().name()
                >
                    {items
                        .into_iter()
                        .enumerate()
                        .map(move |(index, item)| {
                            view! { <MobileMenuItem item index count variant/> }
                        })
                        .collect_view()}
                </ul>
            }
        })
    }
}

#[component]
fn MobileMenuItem(
    item: NavItem,
    index: usize,
    count: usize,
    variant: Signal<Variant>,
) -> impl IntoView {
    let menu = use_menu_context();
    let id = item.id;

    let header = match item.kind() {
        ItemKind::Link => view! {
            <a href=item.url on:click=move |_| menu.close_menu()>{item.title}</a>
        }
        .into_any(),
        ItemKind::Submenu => {
            let expanded = move || menu.submenu_open(id);
            view! {
                <button
                    type="button"
                    class="flex items-center justify-between w-full cursor-pointer text-inherit"
                    aria-expanded=move || expanded().to_string()
                    aria-controls=format!("{id}-subitems")
                    on:click=move |_| menu.toggle_submenu(id)
                >
                    {item.title}
                    <svg
                        style=move || chevron_style(expanded())
                        fill="none"
                        stroke="currentColor"
                        stroke-width="1.5"
                        viewBox="0 0 24 24"
                        width="24"
                        height="24"
                        aria-hidden="true"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            d="M19.5 8.25l-7.5 7.5-7.5-7.5"
                        />
                    </svg>
                </button>
                <SubmenuItems id subitems=item.children().to_vec()/>
            }
            .into_any()
        }
    };

    view! {
        <li
            class="block text-white text-2xl mb-6"
            style=move || item_style(variant.get(), index, count)
        >
            {header}
        </li>
    }
}

#[component]
fn SubmenuItems(id: NavId, subitems: Vec<NavItem>) -> impl IntoView {
    let menu = use_menu_context();
    let count = subitems.len();
    let presence = use_presence(move || menu.submenu_open(id), list_exit_ms(count));
    let mounted = Memo::new(move |_| presence.get().is_mounted());

    move || {
        let subitems = subitems.clone();
        mounted.get().then(move || {
            let variant = move || presence.get().variant();
            view! {
                // height animates with the items so the entries below slide
                <div style=move || submenu_frame_style(variant())>
                    <div class="min-h-0 overflow-hidden">
                        <ul id=format!("{id}-subitems") class="list-none p-0 px-8 mt-6">
                            {subitems
                                .into_iter()
                                .enumerate()
                                .map(move |(index, sub)| {
                                    view! {
                                        <li
                                            class="block text-white text-xl mb-6"
                                            style=move || item_style(variant(), index, count)
                                        >
                                            <a href=sub.url on:click=move |_| menu.close_menu()>
                                                {sub.title}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::provide_menu_context;
    use crate::nav::navigation_items;
    use leptos::prelude::{Owner, RenderHtml};

    fn render_item(title: &str) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let items = navigation_items();
            provide_menu_context(items.clone());
            let item = items.into_iter().find(|i| i.title == title).unwrap();
            view! {
                <MobileMenuItem item index=0 count=3 variant=Signal::stored(Variant::Open)/>
            }
            .to_html()
        })
    }

    #[test]
    fn childless_items_render_as_plain_links() {
        for title in ["Home", "Contact"] {
            let html = render_item(title);
            assert!(html.contains("<a href=\"#\""), "{html}");
            assert!(html.contains(&format!(">{title}</a>")), "{html}");
            assert!(!html.contains("<button"), "{html}");
            assert!(!html.contains("aria-expanded"), "{html}");
        }
    }

    #[test]
    fn open_items_render_in_their_final_position() {
        let html = render_item("Home");
        assert!(html.contains("translateY(0px); opacity: 1;"), "{html}");
    }
}
