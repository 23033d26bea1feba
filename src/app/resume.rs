use leptos::prelude::*;

use super::{overlay::OverlayShell, state::ShellState};
use crate::site::{mailto, LINKEDIN_URL, OWNER};

#[component]
pub fn ResumeModal() -> impl IntoView {
    let driver = expect_context::<ShellState>().resume;
    let resume = driver.payload();

    view! {
        <OverlayShell driver label="Resume">
            <div class="flex h-full gap-8">
                <div class="flex-1 h-full">
                    <iframe
                        src=move || resume.get().unwrap_or_default()
                        title="Resume"
                        class="w-full h-full border-none rounded-lg bg-[#e9e9e9]"
                    />
                </div>
                <div class="w-[300px] flex flex-col justify-center p-8">
                    <div class="flex flex-col gap-4">
                        <a
                            href=move || resume.get().unwrap_or_default()
                            download=""
                            class=ACTION_CLASS
                        >
                            <i class="extra-download mr-2" />
                            "Download PDF"
                        </a>
                        <a href=mailto() class=ACTION_CLASS>
                            <i class="extra-email mr-2" />
                            {format!("Email {OWNER}")}
                        </a>
                        <a
                            href=LINKEDIN_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class=ACTION_CLASS
                        >
                            <i class="devicon-linkedin-plain mr-2" />
                            "My LinkedIn"
                        </a>
                    </div>
                </div>
            </div>
        </OverlayShell>
    }
}

const ACTION_CLASS: &str = "inline-flex items-center justify-center px-6 py-4 rounded-lg bg-[#e9e9e9] text-black no-underline font-medium transition-all duration-200 hover:-translate-y-0.5 hover:bg-[#ddd]";
