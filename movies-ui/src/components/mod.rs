mod new_movie;
mod text_field;

pub use new_movie::NewMovie;
pub use text_field::TextField;
