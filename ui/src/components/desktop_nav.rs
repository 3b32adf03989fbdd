use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};

use crate::nav::navigation_items;

/// Inline links shown from the `md` breakpoint up, where the overlay is hidden.
#[component]
pub fn DesktopNav() -> impl IntoView {
    view! {
        <ul class="hidden md:flex ml-auto gap-8 list-none">
            {navigation_items()
                .into_iter()
                .map(|item| view! { <li><a href=item.url>{item.title}</a></li> })
                .collect_view()}
        </ul>
    }
}
