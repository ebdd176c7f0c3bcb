use crate::domain::{Movie, MovieDraft, MovieField};

/// State behind the add-movie form: the draft plus a generation counter
/// that advances on every submission. Inputs compare their touched marker
/// against the generation, so advancing it clears touched display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMovieForm {
    draft: MovieDraft,
    generation: u32,
}

impl NewMovieForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn value(&self, field: MovieField) -> &str {
        self.draft.get(field)
    }

    pub fn change(&mut self, field: MovieField, value: String) {
        self.draft.set(field, value);
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.draft.is_submit_enabled()
    }

    /// Takes the draft out as an owned `Movie`, leaving an empty draft in a
    /// new generation. Does not re-validate.
    pub fn submit(&mut self) -> Movie {
        let draft = std::mem::take(&mut self.draft);
        self.generation = self.generation.wrapping_add(1);
        draft.into_movie()
    }
}
