use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::CustomAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::OnAttribute;
use leptos::prelude::StyleAttribute;
use leptos::prelude::{Callable, Callback, Get, Signal};
use leptos::{IntoView, component, view};

use crate::dom::{MENU_ITEMS_ID, MENU_TOGGLE_ID};
use crate::motion::Variant;
use crate::motion::variants::{BOTTOM_LINE, MIDDLE_LINE_PATH, TOP_LINE, middle_line_style};

/// Round hamburger button; its lines morph into a cross while `open`.
#[component]
pub fn MenuToggle(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let variant = move || Variant::from_open(open.get());

    view! {
        <button
            type="button"
            id=MENU_TOGGLE_ID
            class="flex items-center justify-center h-10 w-10 rounded-full cursor-pointer mt-0.5"
            aria-expanded=move || open.get().to_string()
            aria-controls=MENU_ITEMS_ID
            on:click=move |_| on_toggle.run(())
        >
            <svg width="23" height="23" viewBox="0 0 23 23" class="mt-0.5 ml-0.5">
                <path
                    fill="transparent"
                    stroke-width="3"
                    stroke="white"
                    stroke-linecap="round"
                    d=move || TOP_LINE.path(variant())
                    style=move || TOP_LINE.style(variant())
                />
                <path
                    fill="transparent"
                    stroke-width="3"
                    stroke="white"
                    stroke-linecap="round"
                    d=MIDDLE_LINE_PATH
                    style=move || middle_line_style(variant())
                />
                <path
                    fill="transparent"
                    stroke-width="3"
                    stroke="white"
                    stroke-linecap="round"
                    d=move || BOTTOM_LINE.path(variant())
                    style=move || BOTTOM_LINE.style(variant())
                />
            </svg>
            <span class="sr-only">"Toggle Mobile Menu"</span>
        </button>
    }
}
