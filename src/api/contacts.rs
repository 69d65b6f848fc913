//! Contact Message Endpoints
//!
//! Contacts live under the backend's `messages` path.

use serde::Serialize;

use crate::models::{Contact, ContactStatus, ListPage};
use crate::query::QueryState;

use super::{fetch_list, request, MutationResult};

#[derive(Serialize)]
struct StatusBody {
    status: ContactStatus,
}

pub async fn get_all_contacts(query: &QueryState) -> ListPage<Contact> {
    fetch_list("messages", query).await
}

pub async fn update_contact_status(contact_id: &str, status: ContactStatus) -> MutationResult {
    request(
        "PATCH",
        &format!("/messages/{}/status", contact_id),
        Some(&StatusBody { status }),
    )
    .await
}

pub async fn delete_contact(contact_id: &str) -> MutationResult {
    request::<(), _>("DELETE", &format!("/messages/{}", contact_id), None).await
}
