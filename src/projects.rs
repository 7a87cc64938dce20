use serde::{Deserialize, Serialize};

/// A project entry shown on the personal site. Pure configuration data;
/// the capture tool never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub date: String,
}

/// The site's project list.
pub fn projects() -> Vec<Project> {
    // Add your projects here
    Vec::new()
}
