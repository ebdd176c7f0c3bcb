use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use movies_ui::App;
use tower_http::compression::CompressionLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

const CSS: &str = r#"
:root {
    --base: #f5f7fa;
    --surface: #ffffff;
    --border: #dbdbdb;
    --text: #363636;
    --muted: #7a7a7a;
    --link: #485fc7;
    --danger: #f14668;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 960px; margin: 0 auto; padding: 1.5rem; }
.page { display: flex; flex-direction: column; gap: 2rem; }
@media (min-width: 768px) { .page { flex-direction: row; } .sidebar { width: 360px; } }
.page-content { flex: 1; }
.movies-count { color: var(--muted); }
.NewMovie { background: var(--surface); border: 1px solid var(--border); border-radius: 8px; padding: 1.25rem; }
.title { font-size: 1.4rem; margin-bottom: 1rem; }
.field { margin-bottom: 0.75rem; }
.label { display: block; font-weight: 600; margin-bottom: 0.25rem; }
.input {
    width: 100%; padding: 0.5rem 0.75rem; border: 1px solid var(--border);
    border-radius: 4px; font-size: 1rem; color: var(--text);
}
.input:focus { outline: none; border-color: var(--link); }
.input.is-danger { border-color: var(--danger); }
.help.is-danger { color: var(--danger); font-size: 0.85rem; margin-top: 0.25rem; }
.button {
    padding: 0.5rem 1.25rem; border: none; border-radius: 4px;
    font-size: 1rem; font-weight: 600; cursor: pointer;
}
.button.is-link { background: var(--link); color: var(--surface); }
.button:disabled { background: var(--muted); cursor: not-allowed; }
"#;

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos_meta::MetaTags;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <style>{CSS}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
