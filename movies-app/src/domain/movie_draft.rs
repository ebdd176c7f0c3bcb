use crate::domain::{Movie, MovieField};
use crate::validation::is_valid_url;
use movies_errors::AppError;

/// The in-progress record behind the add-movie form. Every attribute is
/// always present; unset values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieDraft {
    title: String,
    description: String,
    image_url: String,
    imdb_url: String,
    imdb_id: String,
}

impl MovieDraft {
    pub fn get(&self, field: MovieField) -> &str {
        match field {
            MovieField::Title => &self.title,
            MovieField::Description => &self.description,
            MovieField::ImageUrl => &self.image_url,
            MovieField::ImdbUrl => &self.imdb_url,
            MovieField::ImdbId => &self.imdb_id,
        }
    }

    pub fn set(&mut self, field: MovieField, value: String) {
        let slot = match field {
            MovieField::Title => &mut self.title,
            MovieField::Description => &mut self.description,
            MovieField::ImageUrl => &mut self.image_url,
            MovieField::ImdbUrl => &mut self.imdb_url,
            MovieField::ImdbId => &mut self.imdb_id,
        };
        *slot = value;
    }

    /// Checks a single attribute. Required-ness looks at the trimmed value,
    /// URL shape at the raw one.
    pub fn check(&self, field: MovieField) -> Result<(), AppError> {
        let value = self.get(field);

        if field.is_required() && value.trim().is_empty() {
            return Err(AppError::Required(field.label().to_string()));
        }

        if field.checks_url() && !is_valid_url(value) {
            return Err(AppError::InvalidUrl(field.label().to_string()));
        }

        Ok(())
    }

    /// First failing attribute in render order.
    pub fn validate(&self) -> Result<(), AppError> {
        MovieField::ALL.into_iter().try_for_each(|f| self.check(f))
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn into_movie(self) -> Movie {
        Movie {
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            imdb_url: self.imdb_url,
            imdb_id: self.imdb_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> MovieDraft {
        let mut draft = MovieDraft::default();
        draft.set(MovieField::Title, "Inception".into());
        draft.set(MovieField::ImageUrl, "https://img.example.com/a.png".into());
        draft.set(MovieField::ImdbUrl, "https://www.imdb.com/title/tt1375666".into());
        draft.set(MovieField::ImdbId, "tt1375666".into());
        draft
    }

    #[test]
    fn test_default_is_all_empty() {
        let draft = MovieDraft::default();
        for field in MovieField::ALL {
            assert_eq!(draft.get(field), "");
        }
    }

    #[test]
    fn test_set_touches_only_one_field() {
        let mut draft = filled();
        draft.set(MovieField::Description, "A dream within a dream".into());

        assert_eq!(draft.get(MovieField::Description), "A dream within a dream");
        assert_eq!(draft.get(MovieField::Title), "Inception");
        assert_eq!(draft.get(MovieField::ImdbId), "tt1375666");
    }

    #[test]
    fn test_filled_draft_is_submittable() {
        assert!(filled().is_submit_enabled());
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_description_never_gates_submission() {
        let mut draft = filled();
        draft.set(MovieField::Description, "   ".into());
        assert!(draft.is_submit_enabled());
    }

    #[test]
    fn test_blank_required_field_disables_submit() {
        for field in MovieField::ALL.into_iter().filter(|f| f.is_required()) {
            for blank in ["", "   ", "\t\n"] {
                let mut draft = filled();
                draft.set(field, blank.into());
                assert!(!draft.is_submit_enabled(), "{field} = {blank:?}");
            }
        }
    }

    #[test]
    fn test_empty_url_is_shape_valid_but_required_invalid() {
        let mut draft = filled();
        draft.set(MovieField::ImageUrl, String::new());

        assert!(is_valid_url(draft.get(MovieField::ImageUrl)));
        assert_eq!(
            draft.check(MovieField::ImageUrl),
            Err(AppError::Required("Image URL".into()))
        );
        assert!(!draft.is_submit_enabled());
    }

    #[test]
    fn test_garbage_url_is_shape_invalid() {
        let mut draft = filled();
        draft.set(MovieField::ImageUrl, "not-a-url".into());

        assert_eq!(
            draft.check(MovieField::ImageUrl),
            Err(AppError::InvalidUrl("Image URL".into()))
        );
        assert!(!draft.is_submit_enabled());

        let mut draft = filled();
        draft.set(MovieField::ImdbUrl, "not a url at all!!".into());
        assert_eq!(
            draft.validate(),
            Err(AppError::InvalidUrl("Imdb URL".into()))
        );
    }

    #[test]
    fn test_url_shape_uses_untrimmed_value() {
        let mut draft = filled();
        draft.set(MovieField::ImdbUrl, "https://www.imdb.com/title/tt1375666 ".into());
        assert!(!draft.is_submit_enabled());
    }

    #[test]
    fn test_validate_reports_first_failure_in_render_order() {
        let mut draft = MovieDraft::default();
        draft.set(MovieField::ImageUrl, "nope".into());
        assert_eq!(draft.validate(), Err(AppError::Required("Title".into())));

        draft.set(MovieField::Title, "Heat".into());
        assert_eq!(draft.validate(), Err(AppError::InvalidUrl("Image URL".into())));
    }

    #[test]
    fn test_into_movie_moves_every_field() {
        let mut draft = filled();
        draft.set(MovieField::Description, "dreams".into());

        let movie = draft.into_movie();
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.description, "dreams");
        assert_eq!(movie.image_url, "https://img.example.com/a.png");
        assert_eq!(movie.imdb_url, "https://www.imdb.com/title/tt1375666");
        assert_eq!(movie.imdb_id, "tt1375666");
    }
}
