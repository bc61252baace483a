use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    /// Course code, e.g., "CS101" (required)
    pub code: String,

    /// Course name (required)
    pub name: String,

    /// Academic term, e.g., "1" (required)
    pub term: String,

    /// Academic year (required)
    pub year: i32,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub department: Option<String>,

    #[serde(default)]
    pub faculty: Option<String>,
}
