//! Frontend Models
//!
//! Data structures matching backend entities, plus the wire envelope the
//! REST API wraps every payload in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Common surface of every table entity. The reorder engine and the
/// filter projection only ever touch these fields.
pub trait ListEntity: Clone + PartialEq + 'static {
    fn id(&self) -> &str;
    fn order(&self) -> i32 {
        0
    }
    fn set_order(&mut self, _order: i32) {}
    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }
    fn category(&self) -> Option<&str> {
        None
    }
    fn status_label(&self) -> Option<&str> {
        None
    }
}

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub project_type: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_link: String,
    #[serde(default)]
    pub client_github_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_github_link: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ListEntity for Project {
    fn id(&self) -> &str {
        &self.id
    }
    fn order(&self) -> i32 {
        self.order
    }
    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
    fn category(&self) -> Option<&str> {
        Some(&self.project_type)
    }
}

/// Skill data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub logo: Vec<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ListEntity for Skill {
    fn id(&self) -> &str {
        &self.id
    }
    fn order(&self) -> i32 {
        self.order
    }
    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

/// Blog publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
}

impl BlogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

/// View/like counters kept by the backend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlogMeta {
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
}

/// Blog data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: BlogStatus,
    #[serde(default)]
    pub meta: BlogMeta,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ListEntity for Blog {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

/// Contact message lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContactStatus {
    #[default]
    Pending,
    Replied,
    #[serde(rename = "No Response")]
    NoResponse,
    Dealing,
    Booked,
    Closed,
}

impl ContactStatus {
    pub const ALL: &'static [ContactStatus] = &[
        Self::Pending,
        Self::Replied,
        Self::NoResponse,
        Self::Dealing,
        Self::Booked,
        Self::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Replied => "Replied",
            Self::NoResponse => "No Response",
            Self::Dealing => "Dealing",
            Self::Booked => "Booked",
            Self::Closed => "Closed",
        }
    }
}

/// Contact message data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ListEntity for Contact {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

// ========================
// Wire Envelope
// ========================

/// Standard response envelope: `{success, message, data}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Pagination metadata reported by list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    crate::query::DEFAULT_LIMIT
}

impl Default for ListMeta {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            limit: crate::query::DEFAULT_LIMIT,
        }
    }
}

impl ListMeta {
    /// Number of pages, never less than 1
    pub fn page_count(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        (self.total.div_ceil(self.limit as u64) as u32).max(1)
    }
}

/// List endpoints return `data` either as a bare array or as
/// `{result, meta}` depending on the entity. Both decode here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListData<T> {
    Paged { result: Vec<T>, meta: ListMeta },
    Plain(Vec<T>),
}

/// One normalized page of entities
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub meta: ListMeta,
}

impl<T> ListPage<T> {
    /// Empty page used whenever a read fails. Callers render the empty
    /// state instead of crashing.
    pub fn fallback() -> Self {
        Self {
            items: Vec::new(),
            meta: ListMeta::default(),
        }
    }
}

impl<T> From<ListData<T>> for ListPage<T> {
    fn from(data: ListData<T>) -> Self {
        match data {
            ListData::Paged { result, meta } => Self {
                items: result,
                meta,
            },
            ListData::Plain(items) => {
                let total = items.len() as u64;
                Self {
                    items,
                    meta: ListMeta {
                        total,
                        ..ListMeta::default()
                    },
                }
            }
        }
    }
}

/// One entry of the reorder PATCH payload: `[{id, order}]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPatch {
    pub id: String,
    pub order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_envelope_decodes() {
        let json = r#"{
            "success": true,
            "message": "ok",
            "data": {
                "result": [{"_id": "p1", "title": "Site", "projectType": "frontend"}],
                "meta": {"total": 23, "page": 2, "limit": 10}
            }
        }"#;
        let res: ApiResponse<ListData<Project>> = serde_json::from_str(json).unwrap();
        let page: ListPage<Project> = res.data.unwrap().into();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "p1");
        assert_eq!(page.meta.total, 23);
        assert_eq!(page.meta.page, 2);
    }

    #[test]
    fn test_plain_array_envelope_decodes() {
        let json = r#"{
            "success": true,
            "data": [
                {"_id": "s1", "title": "Rust", "logo": ["a.png"]},
                {"_id": "s2", "title": "Leptos"}
            ]
        }"#;
        let res: ApiResponse<ListData<Skill>> = serde_json::from_str(json).unwrap();
        let page: ListPage<Skill> = res.data.unwrap().into();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.meta.total, 2);
        assert_eq!(page.meta.limit, 10);
    }

    #[test]
    fn test_contact_status_wire_names() {
        let c: Contact =
            serde_json::from_str(r#"{"_id":"c1","name":"A","status":"No Response"}"#).unwrap();
        assert_eq!(c.status, ContactStatus::NoResponse);
        assert_eq!(c.status.as_str(), "No Response");
    }

    #[test]
    fn test_fallback_page_shape() {
        let page = ListPage::<Contact>::fallback();
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total, 0);
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.limit, 10);
    }

    #[test]
    fn test_page_count_rounds_up() {
        let meta = ListMeta {
            total: 23,
            page: 1,
            limit: 10,
        };
        assert_eq!(meta.page_count(), 3);
        assert_eq!(ListMeta::default().page_count(), 1);
    }
}
