use leptos::IntoView;
use leptos::component;
use leptos::view;

#[component]
pub fn Home() -> impl IntoView {
    view! { "Main content" }
}
