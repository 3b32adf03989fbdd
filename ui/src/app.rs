use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::{DesktopNav, MobileMenu};
use crate::routes::RoutesMenu;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Title text="Navigation"/>
      <Router>
        <header>
          <nav class="flex items-center gap-2 p-5 bg-black text-white">
            // stays above the overlay so the brand never gets clipped
            <span class="relative z-10">"Navigation"</span>
            <DesktopNav/>
            <div class="md:hidden">
              <MobileMenu/>
            </div>
          </nav>
        </header>

        <main class="h-screen">
          <RoutesMenu/>
        </main>

        <footer class="bg-zinc-200">
          "Footer content"
        </footer>
      </Router>
    }
}
