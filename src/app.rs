//! Admin Dashboard App
//!
//! Sidebar plus routed content area, with a global toast host.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    BlogForm, BlogsTable, ContactsTable, ProjectForm, ProjectsTable, Sidebar,
    SkillsTable, ToastHost,
};
use crate::context::{AppContext, Route};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (route, set_route) = signal(Route::default());

    provide_context(Store::new(AppState::default()));
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (route, set_route),
    ));

    view! {
        <div class="app-layout">
            <Sidebar />

            <main class="main-content">
                {move || match route.get() {
                    Route::Projects => view! { <ProjectsTable /> }.into_any(),
                    Route::AddProject => view! { <ProjectForm /> }.into_any(),
                    Route::EditProject(id) => view! { <ProjectForm id=id /> }.into_any(),
                    Route::Skills => view! { <SkillsTable /> }.into_any(),
                    Route::Blogs => view! { <BlogsTable /> }.into_any(),
                    Route::AddBlog => view! { <BlogForm /> }.into_any(),
                    Route::EditBlog(id) => view! { <BlogForm id=id /> }.into_any(),
                    Route::Contacts => view! { <ContactsTable /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}
