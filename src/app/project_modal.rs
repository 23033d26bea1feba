use leptos::prelude::*;

use super::{overlay::OverlayShell, state::ShellState};

/// In-page viewer for a project page. The frame stays hidden behind a
/// placeholder until it reports `load`; a page that never loads keeps the
/// placeholder up.
#[component]
pub fn ProjectModal() -> impl IntoView {
    let driver = expect_context::<ShellState>().project;
    let link = driver.payload();
    let loading = driver.loading();

    view! {
        <OverlayShell driver label="Project" content_class="pr-[0.4rem]">
            {move || {
                loading
                    .get()
                    .then(|| {
                        view! {
                            <div
                                class="absolute inset-6 rounded-lg bg-[#e9e9e9] animate-pulse"
                                aria-hidden="true"
                            />
                        }
                    })
            }}
            <iframe
                src=move || link.get().unwrap_or_default()
                title="Project"
                allow="fullscreen"
                class=move || {
                    if loading.get() {
                        "w-full h-full border-none rounded-lg bg-white opacity-0"
                    } else {
                        "w-full h-full border-none rounded-lg bg-white opacity-100 transition-opacity duration-300"
                    }
                }
                on:load=move |_| driver.loaded()
            />
        </OverlayShell>
    }
}
