//! Skill Endpoints

use crate::models::{ListPage, OrderPatch, Skill};
use crate::query::QueryState;

use super::{fetch_list, request, MutationResult};

pub async fn get_all_skills(query: &QueryState) -> ListPage<Skill> {
    fetch_list("skills", query).await
}

pub async fn create_skill(skill: &Skill) -> MutationResult {
    request("POST", "/skills", Some(skill)).await
}

pub async fn update_skill_order(payload: &[OrderPatch]) -> MutationResult {
    request("PATCH", "/skills/reorder", Some(payload)).await
}

pub async fn delete_skill(skill_id: &str) -> MutationResult {
    request::<(), _>("DELETE", &format!("/skills/{}", skill_id), None).await
}
