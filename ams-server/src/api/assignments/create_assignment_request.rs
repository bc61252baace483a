use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    /// Assignment name (required)
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Due date as unix seconds
    #[serde(default)]
    pub due_at: Option<i64>,

    #[serde(default)]
    pub total_points: Option<i32>,
}
