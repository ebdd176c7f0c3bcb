use crate::components::TextField;
use leptos::prelude::*;
use movies_app::domain::{Movie, MovieField, NewMovieForm};
use movies_app::validation::is_valid_url;

fn field_value(form: RwSignal<NewMovieForm>, field: MovieField) -> Signal<String> {
    Signal::derive(move || form.with(|f| f.value(field).to_string()))
}

fn url_valid(form: RwSignal<NewMovieForm>, field: MovieField) -> Signal<bool> {
    Signal::derive(move || form.with(|f| is_valid_url(f.value(field))))
}

fn submit_disabled(form: RwSignal<NewMovieForm>) -> Memo<bool> {
    Memo::new(move |_| !form.with(NewMovieForm::is_submit_enabled))
}

/// Hands the draft to `on_add` once the form signal is released, so the
/// callback may read reactive state.
fn submit_form(form: RwSignal<NewMovieForm>, on_add: Callback<Movie>) {
    if let Some(movie) = form.try_update(NewMovieForm::submit) {
        tracing::debug!(title = %movie.title, "adding movie");
        on_add.run(movie);
    }
}

#[component]
pub fn NewMovie(#[prop(into)] on_add: Callback<Movie>) -> impl IntoView {
    let form = RwSignal::new(NewMovieForm::new());

    let generation = Signal::derive(move || form.with(NewMovieForm::generation));
    let is_disabled = submit_disabled(form);

    let on_change = Callback::new(move |(field, value): (MovieField, String)| {
        form.update(|f| f.change(field, value));
    });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_form(form, on_add);
    };

    view! {
        <form class="NewMovie" on:submit=on_form_submit>
            <h2 class="title">"Add a movie"</h2>

            <TextField
                field=MovieField::Title
                value=field_value(form, MovieField::Title)
                on_change=on_change
                generation=generation
            />

            <TextField
                field=MovieField::Description
                value=field_value(form, MovieField::Description)
                on_change=on_change
                generation=generation
            />

            <TextField
                field=MovieField::ImageUrl
                value=field_value(form, MovieField::ImageUrl)
                on_change=on_change
                generation=generation
                is_valid=url_valid(form, MovieField::ImageUrl)
            />

            <TextField
                field=MovieField::ImdbUrl
                value=field_value(form, MovieField::ImdbUrl)
                on_change=on_change
                generation=generation
                is_valid=url_valid(form, MovieField::ImdbUrl)
            />

            <TextField
                field=MovieField::ImdbId
                value=field_value(form, MovieField::ImdbId)
                on_change=on_change
                generation=generation
            />

            <div class="field is-grouped">
                <div class="control">
                    <button
                        type="submit"
                        data-cy="submit-button"
                        class="button is-link"
                        disabled=move || is_disabled.get()
                    >
                        "Add"
                    </button>
                </div>
            </div>
        </form>
    }
}
