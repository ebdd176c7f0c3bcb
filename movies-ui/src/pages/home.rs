use crate::components::NewMovie;
use leptos::prelude::*;
use movies_app::domain::Movie;

fn added_label(count: usize) -> String {
    match count {
        1 => "1 movie added".to_string(),
        n => format!("{n} movies added"),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let movies = RwSignal::new(Vec::<Movie>::new());

    let on_add = move |movie: Movie| {
        tracing::info!(imdb_id = %movie.imdb_id, "movie added to list");
        movies.update(|list| list.push(movie));
    };

    view! {
        <div class="page">
            <div class="page-content">
                <p class="movies-count">{move || added_label(movies.with(Vec::len))}</p>
            </div>
            <div class="sidebar">
                <NewMovie on_add=on_add/>
            </div>
        </div>
    }
}
