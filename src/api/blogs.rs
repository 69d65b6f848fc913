//! Blog Endpoints

use crate::models::{ApiResponse, Blog, ListPage};
use crate::query::QueryState;

use super::{fetch_list, request, ApiError, MutationResult};

pub async fn get_all_blogs(query: &QueryState) -> ListPage<Blog> {
    fetch_list("blogs", query).await
}

pub async fn get_single_blog(blog_id: &str) -> Result<Option<Blog>, ApiError> {
    let res: ApiResponse<Blog> =
        request::<(), _>("GET", &format!("/blogs/blog/{}", blog_id), None).await?;
    Ok(res.data)
}

pub async fn create_blog(blog: &Blog) -> MutationResult {
    request("POST", "/blogs", Some(blog)).await
}

pub async fn update_blog(blog_id: &str, blog: &Blog) -> MutationResult {
    request("PATCH", &format!("/blogs/edit-blog/{}", blog_id), Some(blog)).await
}

pub async fn delete_blog(blog_id: &str) -> MutationResult {
    request::<(), _>("DELETE", &format!("/blogs/{}", blog_id), None).await
}
