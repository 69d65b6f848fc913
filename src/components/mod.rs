//! UI Components
//!
//! Reusable Leptos components.

mod blog_form;
mod blogs_table;
mod contacts_table;
mod delete_confirm_modal;
mod filter_bar;
mod image_uploader;
mod pagination;
mod project_form;
mod projects_table;
mod sidebar;
mod skill_form;
mod skills_table;
mod toast_host;

pub use blog_form::BlogForm;
pub use blogs_table::BlogsTable;
pub use contacts_table::ContactsTable;
pub use delete_confirm_modal::DeleteConfirmModal;
pub use filter_bar::FilterBar;
pub use image_uploader::ImageUploader;
pub use pagination::Pagination;
pub use project_form::ProjectForm;
pub use projects_table::ProjectsTable;
pub use sidebar::Sidebar;
pub use skill_form::SkillForm;
pub use skills_table::SkillsTable;
pub use toast_host::ToastHost;
