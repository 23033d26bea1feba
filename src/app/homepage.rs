use leptos::prelude::*;
use leptos_meta::Title;

use super::{intro::IntroSection, projects::ProjectsSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <IntroSection />
        <ProjectsSection />
    }
}

#[component]
pub fn WorkPage() -> impl IntoView {
    view! {
        <Title text="Work" />
        <ProjectsSection />
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <IntroSection />
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <p class="mx-auto text-[#4a4a4a]">"Page not found."</p>
    }
}
