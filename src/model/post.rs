use crate::constants::{TAG_TAXONOMY, TAG_TERM_SLOT};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `{ "rendered": "..." }` wrapper WordPress uses for HTML fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// A post as returned by `GET /wp-json/wp/v2/posts?_embed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WpPost {
    #[serde(default)]
    pub id: u64,
    pub slug: String,
    #[serde(default)]
    pub link: String,
    /// `null` for unpublished drafts.
    #[serde(default)]
    pub date_gmt: Option<String>,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default, rename = "_embedded")]
    pub embedded: Option<Embedded>,
}

impl WpPost {
    /// Name of the first embedded author, or `""`.
    pub fn author_name(&self) -> &str {
        self.embedded
            .as_ref()
            .map(Embedded::author_name)
            .unwrap_or_default()
    }

    pub fn featured_media(&self) -> Option<&WpMedia> {
        self.embedded.as_ref().and_then(Embedded::featured_media)
    }

    pub fn tag_terms(&self) -> &[WpTerm] {
        self.embedded
            .as_ref()
            .map(Embedded::tag_terms)
            .unwrap_or_default()
    }
}

/// Related resources inlined by `_embed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embedded {
    #[serde(default)]
    pub author: Vec<WpAuthor>,
    #[serde(default, rename = "wp:featuredmedia")]
    pub featured_media: Vec<WpMedia>,
    /// One group per taxonomy: categories, then tags.
    #[serde(
        default,
        rename = "wp:term",
        deserialize_with = "deserialize_term_groups"
    )]
    pub terms: Vec<Vec<WpTerm>>,
}

impl Embedded {
    pub fn author_name(&self) -> &str {
        self.author
            .first()
            .and_then(|author| author.name.as_deref())
            .unwrap_or_default()
    }

    pub fn featured_media(&self) -> Option<&WpMedia> {
        self.featured_media.first()
    }

    /// The tag group of `wp:term`.
    ///
    /// Found by taxonomy name when the terms carry one. Only when no term
    /// in any group is named does this fall back to the positional slot,
    /// where WordPress puts `post_tag` after `category`.
    pub fn tag_terms(&self) -> &[WpTerm] {
        if let Some(group) = self
            .terms
            .iter()
            .find(|group| group.iter().any(WpTerm::is_tag))
        {
            return group;
        }

        let any_named = self
            .terms
            .iter()
            .flatten()
            .any(|term| term.taxonomy.is_some());
        if any_named {
            return &[];
        }

        self.terms
            .get(TAG_TERM_SLOT)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Embedded user record. Restricted authors come back as error objects
/// without a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WpAuthor {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Embedded attachment record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WpMedia {
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Embedded taxonomy term (category or tag).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WpTerm {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub taxonomy: Option<String>,
}

impl WpTerm {
    pub fn is_tag(&self) -> bool {
        self.taxonomy.as_deref() == Some(TAG_TAXONOMY)
    }
}

/// Reads `wp:term` one group at a time. A taxonomy the reader may not see
/// is embedded as an error object instead of an array; that group, or any
/// group that fails to parse, becomes empty so the slot positions hold.
fn deserialize_term_groups<'de, D>(deserializer: D) -> Result<Vec<Vec<WpTerm>>, D::Error>
where
    D: Deserializer<'de>,
{
    let groups = Vec::<Value>::deserialize(deserializer)?;

    Ok(groups
        .into_iter()
        .map(|group| match group {
            Value::Array(_) => serde_json::from_value(group).unwrap_or_else(|e| {
                log::debug!("Skipping unparsable wp:term group: {}", e);
                Vec::new()
            }),
            other => {
                log::debug!("Skipping non-array wp:term entry: {}", other);
                Vec::new()
            }
        })
        .collect())
}
