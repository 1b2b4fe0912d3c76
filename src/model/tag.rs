use serde::{Deserialize, Serialize};

/// A tag as returned by `GET /wp-json/wp/v2/tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WpTag {
    pub id: u64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
}
