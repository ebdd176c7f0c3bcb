use serde::{Deserialize, Serialize};

/// A submitted movie entry, owned by whoever received it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub imdb_url: String,
    pub imdb_id: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        imdb_url: impl Into<String>,
        imdb_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            imdb_url: imdb_url.into(),
            imdb_id: imdb_id.into(),
        }
    }
}
