//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::query::{self, QueryState};

/// Dashboard screens. Edit routes carry the row id they operate on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Projects,
    AddProject,
    EditProject(String),
    Skills,
    Blogs,
    AddBlog,
    EditBlog(String),
    Contacts,
}

impl Default for Route {
    fn default() -> Self {
        Self::Projects
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch lists from the backend - read.
    /// Bumping it is the cache invalidation step after any mutation.
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Current screen - read
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        route: (ReadSignal<Route>, WriteSignal<Route>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            route: route.0,
            set_route: route.1,
        }
    }

    /// Invalidate every cached list read; fetch effects re-run
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Client-side route transition. The URL query is rewound to the
    /// defaults first: each screen owns its own filter keys, and a
    /// `status` or `category` left over from another entity would filter
    /// the next screen into an empty table.
    pub fn navigate(&self, route: Route) {
        query::sync_to_url(&QueryState::default());
        self.set_route.set(route);
    }
}

/// Get the app context, panicking only if the tree was built without one
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
