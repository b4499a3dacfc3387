mod blog;
mod contact;
mod header;
mod homepage;

use chrono::DateTime;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use blog::BlogPage;
use contact::ContactPage;
use header::Header;
use homepage::HomePage;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Dark => "dark bg-background text-foreground",
            Self::Light => "light bg-white text-gray-900",
        }
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="alternate"
                    type="application/rss+xml"
                    title="Tech Insights & Tutorials"
                    href="/rss.xml"
                />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    view! {
        <Title formatter=|title| format!("Peter Muturi - {title}") />
        <Router>
            <div class=move || {
                format!("min-h-screen flex flex-col transition-colors {}", theme.get().class())
            }>
                <Header theme set_theme />
                <main class="flex flex-col flex-grow items-center mx-auto w-full max-w-6xl px-6 py-8">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/blog") view=BlogPage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_else(|_| BUILD_TIME.to_string());
    view! {
        <footer class="border-t border-muted/30 py-6 text-center text-sm text-muted">
            <p>"© Peter Muturi. All rights reserved."</p>
            <p class="mt-1">"Last built " {built}</p>
        </footer>
    }
}
