use leptos::{
    either::Either,
    ev::{Event, KeyboardEvent},
    html,
    prelude::*,
};

use super::{
    state::ShellState,
    timer::{self, timer_slot},
};
use crate::interaction::{
    hover::{CARD_EASING, CARD_TRANSITION_MS, LAYER_TRANSITION_MS},
    CarouselTracker, HoverCard,
};
use crate::projects::{projects, ProjectRecord};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let shell = expect_context::<ShellState>();

    let list = match projects() {
        Ok(projects) => Either::Left(move || {
            if shell.is_narrow.get() {
                Either::Left(view! { <MobileCarousel projects /> })
            } else {
                Either::Right(view! { <ProjectList projects /> })
            }
        }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <p class="text-sm text-[#808080]">"Projects are unavailable right now."</p>
            })
        }
    };

    view! {
        <section class="flex-1 max-w-[720px] max-md:max-w-full">
            <h2 class="flex items-center gap-2 mb-4 text-lg font-normal text-[#808080]">
                "My Work"
            </h2>
            {list}
        </section>
    }
}

#[component]
fn ProjectList(projects: &'static [ProjectRecord]) -> impl IntoView {
    view! {
        <div class="w-full max-w-[480px] max-md:max-w-full">
            <div class="flex flex-col gap-3">
                {projects
                    .iter()
                    .map(|project| view! { <ProjectCard project expandable=true /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Snap-scrolling track of cards with indicator dots, for narrow layouts.
#[component]
fn MobileCarousel(projects: &'static [ProjectRecord]) -> impl IntoView {
    let track_ref = NodeRef::<html::Div>::new();
    let (tracker, set_tracker) = signal(CarouselTracker::new(projects.len()));

    let on_scroll = move |_: Event| {
        let Some(track) = track_ref.get_untracked() else {
            return;
        };
        let scroll_left = track.scroll_left() as f64;
        let track_width = track.offset_width() as f64;
        let mut next = tracker.get_untracked();
        let previous = next.active_index();
        if next.on_scroll(scroll_left, track_width) != previous {
            set_tracker.set(next);
        }
    };

    view! {
        <div class="relative w-screen -mx-4 overflow-hidden">
            <div
                node_ref=track_ref
                on:scroll=on_scroll
                class="flex gap-4 overflow-x-auto snap-x snap-mandatory px-4 py-2 no-scrollbar"
            >
                {projects
                    .iter()
                    .map(|project| {
                        view! {
                            <div class="min-w-[300px] w-[calc(100vw-2rem)] h-[30vh] mb-12 snap-center">
                                <ProjectCard project expandable=false />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex justify-center gap-2 mt-4 pb-2">
                {(0..projects.len())
                    .map(|i| {
                        view! {
                            <div class=move || {
                                if tracker.get().is_active(i) {
                                    "w-1.5 h-1.5 rounded-full bg-[#ff3000] transition-colors duration-300"
                                } else {
                                    "w-1.5 h-1.5 rounded-full bg-black/20 transition-colors duration-300"
                                }
                            } />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// A project tile. Expandable cards grow on pointer hover or keyboard focus;
/// carousel cards fill their slot instead.
#[component]
fn ProjectCard(project: &'static ProjectRecord, expandable: bool) -> impl IntoView {
    let shell = expect_context::<ShellState>();
    let (card, set_card) = signal(HoverCard::default());
    let transition = timer_slot();

    let retarget = move |expand: bool| {
        if !expandable {
            return;
        }
        let generation = set_card.try_update(|c| if expand { c.enter() } else { c.leave() });
        if let Some(generation) = generation {
            timer::schedule(transition, CARD_TRANSITION_MS, move || {
                set_card.try_update(|c| c.settle(generation));
            });
        }
    };

    let card_style = move || {
        if expandable {
            format!(
                "height: {}px; transition: height {CARD_TRANSITION_MS}ms {CARD_EASING};",
                card.get().visual().height_px,
            )
        } else {
            "height: 100%;".to_string()
        }
    };
    let will_change = move || {
        if card.get().is_settled() {
            ""
        } else {
            "will-change: transform, opacity;"
        }
    };
    let image_style = move || {
        let v = card.get().visual();
        format!(
            "background-image: url('{}'); opacity: {}; transform: scale({}); transition: transform {LAYER_TRANSITION_MS}ms {CARD_EASING}, opacity {LAYER_TRANSITION_MS}ms {CARD_EASING}; {}",
            project.image,
            v.image_opacity,
            v.image_scale,
            will_change(),
        )
    };
    let gradient_style = move || {
        let v = card.get().visual();
        format!(
            "background: linear-gradient(to bottom, rgba(0, 0, 0, {}) 0%, rgba(0, 0, 0, {}) 100%);",
            v.gradient_top, v.gradient_bottom,
        )
    };
    let content_style = move || {
        format!(
            "transform: translateY({}px); transition: transform {LAYER_TRANSITION_MS}ms {CARD_EASING}; {}",
            card.get().visual().content_offset_px,
            will_change(),
        )
    };

    view! {
        <div
            class="relative overflow-hidden rounded-xl p-5 cursor-pointer origin-center"
            style=card_style
            role="button"
            tabindex="0"
            aria-label=format!("{} ({})", project.title, project.year)
            on:click=move |_| shell.view_project(project)
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    shell.view_project(project);
                }
            }
            on:mouseenter=move |_| retarget(true)
            on:mouseleave=move |_| retarget(false)
            on:focus=move |_| retarget(true)
            on:blur=move |_| retarget(false)
        >
            <div class="absolute inset-0 bg-cover bg-center" style=image_style />
            <div class="absolute inset-0" style=gradient_style />
            <div class="relative z-[2]" style=content_style>
                <div class="flex justify-between items-center mb-3">
                    <h3 class="m-0 text-[1.2rem] font-medium text-white">{project.title.clone()}</h3>
                    <span class="text-[0.9rem] text-white/70">{project.year.clone()}</span>
                </div>
                <p class="m-0 text-[0.9rem] leading-normal text-white/90">
                    {project.description.clone()}
                </p>
            </div>
        </div>
    }
}
