use serde::{Deserialize, Serialize};

/// Listing tier of a marketplace idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaTier {
    Demo,
    Standard,
    Premium,
}

/// A marketplace listing, as much of it as the AI features need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tier: IdeaTier,
    pub price: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}
