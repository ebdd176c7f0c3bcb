mod movie;
mod movie_draft;
mod movie_field;
mod new_movie_form;

pub use movie::Movie;
pub use movie_draft::MovieDraft;
pub use movie_field::MovieField;
pub use new_movie_form::NewMovieForm;
