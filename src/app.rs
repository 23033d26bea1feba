mod homepage;
mod intro;
mod navigation;
mod overlay;
mod project_modal;
mod projects;
mod resume;
mod state;
mod timer;

pub use state::ShellState;

use homepage::{AboutPage, HomePage, NotFound, WorkPage};
use leptos::{ev::keydown, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_document, use_event_listener};
use navigation::Navigation;
use project_modal::ProjectModal;
use resume::ResumeModal;

use crate::site::{copyright_year, OWNER, SITE_TITLE};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
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

    let state = ShellState::new();
    provide_context(state);

    let _ = use_event_listener(use_document(), keydown, move |ev| {
        if ev.key() == "Escape" {
            state.close_overlays();
        }
    });

    view! {
        <Title formatter=|title| format!("{SITE_TITLE} - {title}") />

        <Router>
            <div class="flex flex-col min-h-screen">
                <Navigation />
                <main class="flex flex-1 gap-8 w-full max-w-[1600px] mt-[60px] mx-auto px-16 py-8 max-xl:px-8 max-md:flex-col max-md:gap-4 max-md:p-4">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/work") view=WorkPage />
                        <Route path=path!("/about") view=AboutPage />
                    </Routes>
                </main>
                <Footer />
            </div>
            <ResumeModal />
            <ProjectModal />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-6 text-center text-sm text-[#808080]">
            {format!("© {} {OWNER}", copyright_year())}
        </footer>
    }
}
