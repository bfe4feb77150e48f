use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::NavigationBar;
use crate::i18n::{provide_locale, use_locale};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // Locale context is installed once here so every region of the page
    // reads and requests language changes through the same signals.
    provide_locale();

    view! {
        <Stylesheet id="leptos" href="/pkg/stratum-site.css"/>

        <Title text="Stratum V2"/>

        <Router>
            <NavigationBar />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("about")
                        view=|| view! { <ContentPage title_key="pages.about.title"/> }
                    />
                    <Route
                        path=StaticSegment("use-cases")
                        view=|| view! { <ContentPage title_key="pages.useCases.title"/> }
                    />
                    <Route
                        path=StaticSegment("miners")
                        view=|| view! { <ContentPage title_key="pages.miners.title"/> }
                    />
                    <Route
                        path=StaticSegment("pools")
                        view=|| view! { <ContentPage title_key="pages.pools.title"/> }
                    />
                    <Route
                        path=StaticSegment("developers")
                        view=|| view! { <ContentPage title_key="pages.developers.title"/> }
                    />
                    <Route
                        path=StaticSegment("resources")
                        view=|| view! { <ContentPage title_key="pages.resources.title"/> }
                    />
                    <Route
                        path=StaticSegment("specifications")
                        view=|| view! { <ContentPage title_key="pages.specifications.title"/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section class="hero">
            <h1>{move || i18n.t("pages.home.title")}</h1>
            <p class="hero__tagline">{move || i18n.t("pages.home.tagline")}</p>
        </section>
    }
}

#[component]
fn ContentPage(title_key: &'static str) -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section class="content-page">
            <h1>{move || i18n.t(title_key)}</h1>
        </section>
    }
}
