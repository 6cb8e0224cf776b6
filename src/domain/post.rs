use uuid::Uuid;

/// A content post as the evaluator sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub tags: Vec<String>,
    pub author_id: Uuid,
}
