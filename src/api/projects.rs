//! Project Endpoints

use crate::models::{ApiResponse, ListPage, OrderPatch, Project};
use crate::query::QueryState;

use super::{fetch_list, request, ApiError, MutationResult};

pub async fn get_all_projects(query: &QueryState) -> ListPage<Project> {
    fetch_list("projects", query).await
}

pub async fn get_single_project(project_id: &str) -> Result<Option<Project>, ApiError> {
    let res: ApiResponse<Project> =
        request::<(), _>("GET", &format!("/projects/project/{}", project_id), None).await?;
    Ok(res.data)
}

pub async fn create_project(project: &Project) -> MutationResult {
    request("POST", "/projects", Some(project)).await
}

pub async fn update_project(project_id: &str, project: &Project) -> MutationResult {
    request(
        "PATCH",
        &format!("/projects/edit-project/{}", project_id),
        Some(project),
    )
    .await
}

/// One PATCH carrying `{id, order}` for the entire list
pub async fn update_project_order(payload: &[OrderPatch]) -> MutationResult {
    request("PATCH", "/projects/reorder", Some(payload)).await
}

pub async fn delete_project(project_id: &str) -> MutationResult {
    request::<(), _>("DELETE", &format!("/projects/{}", project_id), None).await
}
