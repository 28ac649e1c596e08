use crate::server::{data::blog::BlogRepository, model::blog::CreateBlogParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod slug_exists;

fn params(author_id: i32, slug: &str) -> CreateBlogParams {
    CreateBlogParams {
        title: "Writing extractors".to_string(),
        description: "How request binding works".to_string(),
        draft_text: "Draft body".to_string(),
        slug: slug.to_string(),
        img_url: Some("https://example.com/cover.png".to_string()),
        tags: vec!["RUST".to_string()],
        author_id,
    }
}
