//! Sidebar Component
//!
//! Left navigation between the dashboard screens.

use leptos::prelude::*;

use crate::context::{use_app_context, Route};

const NAV_ITEMS: &[(&str, Route)] = &[
    ("Projects", Route::Projects),
    ("Skills", Route::Skills),
    ("Blogs", Route::Blogs),
    ("Contacts", Route::Contacts),
];

fn section_of(route: &Route) -> &'static str {
    match route {
        Route::Projects | Route::AddProject | Route::EditProject(_) => "Projects",
        Route::Skills => "Skills",
        Route::Blogs | Route::AddBlog | Route::EditBlog(_) => "Blogs",
        Route::Contacts => "Contacts",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="sidebar">
            <h2 class="sidebar-title">"Portfolio Admin"</h2>
            {NAV_ITEMS
                .iter()
                .map(|(label, route)| {
                    let label = *label;
                    let route = route.clone();
                    let is_active = move || section_of(&ctx.route.get()) == label;
                    view! {
                        <button
                            class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                            on:click=move |_| ctx.navigate(route.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
