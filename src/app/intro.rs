use leptos::prelude::*;

use super::state::ShellState;
use crate::interaction::Disclosure;
use crate::site::{DISPATCH_URL, OWNER, PROFILE_ICON_PATH};

#[component]
pub fn IntroSection() -> impl IntoView {
    let shell = expect_context::<ShellState>();
    let (bio, set_bio) = signal(Disclosure::default());

    view! {
        <section class="flex-1 max-w-[720px] max-md:max-w-full">
            <div class="max-w-[400px] max-md:max-w-full">
                <h1 class="flex items-end gap-[0.1rem] mb-6 text-5xl text-[#ff4800]">
                    "Hell"
                    <img
                        src=PROFILE_ICON_PATH
                        alt=format!("{OWNER}'s profile icon")
                        class="w-7 h-7 mb-[11px] rounded-full object-cover"
                    />
                </h1>
                <p class="mb-6 text-lg leading-relaxed text-[#1a1a1a]">
                    "I'm " {OWNER}
                    ", an interaction designer blending design thinking with AI-powered prototyping and vibe-driven code."
                </p>
                <p class=move || {
                    format!(
                        "text-base leading-relaxed text-[#4a4a4a] {}",
                        bio.get().clamp_class(shell.layout()),
                    )
                }>
                    "I've helped shape human-machine interactions for electric vehicles⚡, designed networked ecosystems for last-mile mobility "
                    <LinkHighlight href=DISPATCH_URL>"@Dispatch Network↗"</LinkHighlight>
                    ", and turned napkin sketches into functional prototypes using AI and code. No-code, low-code, and sometimes... full-code."
                </p>
                {move || {
                    Disclosure::control_visible(shell.layout())
                        .then(|| {
                            view! {
                                <button
                                    class="mt-1 p-0 bg-transparent border-none text-sm text-[#4a4a4a] underline cursor-pointer"
                                    aria-expanded=move || bio.get().is_expanded().to_string()
                                    on:click=move |_| set_bio.update(Disclosure::toggle)
                                >
                                    {move || bio.get().label()}
                                </button>
                            }
                        })
                }}
                <p class="mt-6 mb-6 text-base leading-relaxed text-[#4a4a4a]">
                    "Currently designing and prototyping at "
                    <LinkHighlight href=DISPATCH_URL>"@Dispatch Network↗"</LinkHighlight> "."
                </p>
            </div>
        </section>
    }
}

#[component]
fn LinkHighlight(href: &'static str, children: Children) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="text-inherit no-underline border-b border-current transition-opacity duration-200 hover:opacity-70"
        >
            {children()}
        </a>
    }
}
