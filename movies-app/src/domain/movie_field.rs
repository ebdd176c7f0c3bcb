use std::fmt;

/// One of the five attributes collected by the add-movie form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieField {
    Title,
    Description,
    ImageUrl,
    ImdbUrl,
    ImdbId,
}

impl MovieField {
    /// Render order.
    pub const ALL: [MovieField; 5] = [
        Self::Title,
        Self::Description,
        Self::ImageUrl,
        Self::ImdbUrl,
        Self::ImdbId,
    ];

    /// Key used for the input `name` and in the serialized record.
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::ImageUrl => "imageUrl",
            Self::ImdbUrl => "imdbUrl",
            Self::ImdbId => "imdbId",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::ImageUrl => "Image URL",
            Self::ImdbUrl => "Imdb URL",
            Self::ImdbId => "Imdb ID",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Description)
    }

    pub fn checks_url(self) -> bool {
        matches!(self, Self::ImageUrl | Self::ImdbUrl)
    }
}

impl fmt::Display for MovieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
