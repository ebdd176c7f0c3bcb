use leptos::prelude::*;
use movies_app::domain::MovieField;
use movies_errors::AppError;
use uuid::Uuid;

/// Test hook name, e.g. `movie-imdbUrl`.
fn data_cy(field: MovieField) -> String {
    format!("movie-{}", field.name())
}

/// Element id, unique per mounted input so several forms can coexist.
fn field_id(field: MovieField) -> String {
    format!("{}-{}", data_cy(field), Uuid::new_v4().simple())
}

/// A required field only complains once it has been left during the
/// current generation; a malformed value always does.
fn visible_error(field: MovieField, value: &str, touched: bool, is_valid: bool) -> Option<AppError> {
    if field.is_required() && touched && value.trim().is_empty() {
        Some(AppError::Required(field.label().to_string()))
    } else if !is_valid {
        Some(AppError::InvalidUrl(field.label().to_string()))
    } else {
        None
    }
}

/// Remembers the generation in which an input last lost focus. The input
/// counts as touched only while that is still the current generation.
#[derive(Clone, Copy)]
pub(crate) struct Touched {
    left_in: RwSignal<Option<u32>>,
    generation: Signal<u32>,
}

impl Touched {
    pub(crate) fn new(generation: Signal<u32>) -> Self {
        Self {
            left_in: RwSignal::new(None),
            generation,
        }
    }

    pub(crate) fn mark(self) {
        self.left_in.set(Some(self.generation.get_untracked()));
    }

    pub(crate) fn get(self) -> bool {
        self.left_in.get() == Some(self.generation.get())
    }
}

pub(crate) fn field_error(
    field: MovieField,
    value: Signal<String>,
    touched: Touched,
    is_valid: Option<Signal<bool>>,
) -> Memo<Option<AppError>> {
    Memo::new(move |_| {
        let valid = is_valid.map(|s| s.get()).unwrap_or(true);
        value.with(|v| visible_error(field, v, touched.get(), valid))
    })
}

/// Labeled text input bound to one movie attribute.
#[component]
pub fn TextField(
    field: MovieField,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<(MovieField, String)>,
    #[prop(into)] generation: Signal<u32>,
    #[prop(optional)] is_valid: Option<Signal<bool>>,
) -> impl IntoView {
    let touched = Touched::new(generation);
    let error = field_error(field, value, touched, is_valid);

    let id = field_id(field);

    view! {
        <div class="field">
            <label class="label" for=id.clone()>
                {field.label()}
            </label>
            <div class="control">
                <input
                    id=id
                    type="text"
                    name=field.name()
                    data-cy=data_cy(field)
                    class=move || if error.get().is_some() { "input is-danger" } else { "input" }
                    placeholder=format!("Enter {}", field.label())
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run((field, event_target_value(&ev)))
                    on:blur=move |_| touched.mark()
                />
            </div>
            {move || error.get().map(|e| view! {
                <p class="help is-danger">{e.user_message()}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_blank_field_is_quiet() {
        assert_eq!(visible_error(MovieField::Title, "", false, true), None);
    }

    #[test]
    fn test_touched_blank_required_field_complains() {
        assert_eq!(
            visible_error(MovieField::Title, "  ", true, true),
            Some(AppError::Required("Title".into()))
        );
    }

    #[test]
    fn test_optional_field_never_requires() {
        assert_eq!(visible_error(MovieField::Description, "", true, true), None);
    }

    #[test]
    fn test_invalid_value_shows_without_touch() {
        assert_eq!(
            visible_error(MovieField::ImdbUrl, "not-a-url", false, false),
            Some(AppError::InvalidUrl("Imdb URL".into()))
        );
    }

    #[test]
    fn test_data_cy_prefixes_wire_key() {
        assert_eq!(data_cy(MovieField::Title), "movie-title");
        assert_eq!(data_cy(MovieField::ImdbUrl), "movie-imdbUrl");
    }

    #[test]
    fn test_field_ids_differ_per_instance() {
        let first = field_id(MovieField::ImageUrl);
        let second = field_id(MovieField::ImageUrl);

        assert!(first.starts_with("movie-imageUrl-"));
        assert!(second.starts_with("movie-imageUrl-"));
        assert_ne!(first, second);
    }
}
