mod about;
mod badge;
mod blog;
mod hero;
mod homepage;
mod resume;
mod section;
mod sidebar;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::content;

use blog::{BlogHome, BlogPage, BlogWrapper};
use homepage::HomePage;
use sidebar::Sidebar;

const DEVICON_CSS: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon@v2.16.0/devicon.min.css";
const PARTICLES_JS: &str = "https://cdn.jsdelivr.net/npm/particles.js@2.0.0/particles.min.js";

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
                <link rel="stylesheet" href=DEVICON_CSS />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script src=PARTICLES_JS></script>
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let owner: &'static str = &content().profile.name;

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Router>
            <div id="template-page">
                <div id="container-wrap">
                    <Sidebar />
                    <main id="template-main">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                            <ParentRoute path=path!("/blog") view=BlogWrapper>
                                <Route path=path!("") view=BlogHome />
                                <Route path=path!(":post") view=BlogPage />
                            </ParentRoute>
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
