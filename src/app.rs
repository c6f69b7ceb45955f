mod contact;
mod cursor;
mod homepage;
mod icons;
mod marquee;
mod navbar;
mod progress;
mod projects;
mod resume;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER_NAME;
use crate::theme::ThemeMode;

use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// Shared display mode, provided once by [`App`].
pub fn use_theme() -> RwSignal<ThemeMode> {
    expect_context::<RwSignal<ThemeMode>>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(RwSignal::new(ThemeMode::default()));

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta name="description" content="Portfolio of a full-stack web developer." />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
