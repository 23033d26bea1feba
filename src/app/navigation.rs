use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::{components::*, hooks::use_location};
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use super::{
    state::ShellState,
    timer::{self, timer_slot},
};
use crate::interaction::{
    celebration::{confetti, BURST_MS, CONFETTI_COUNT},
    Celebration, NavState, Spinner,
};
use crate::site::{mailto, LINKEDIN_URL, SITE_TITLE};

const LINK_CLASS: &str = "no-underline text-black";
const BUTTON_CLASS: &str = "p-0 bg-transparent border-none text-black font-[inherit] cursor-pointer";

#[component]
pub fn Navigation() -> impl IntoView {
    let shell = expect_context::<ShellState>();
    let menu_open = Memo::new(move |_| shell.nav.with(|n| n.menu_open()));

    let location = use_location();
    Effect::watch(
        move || location.pathname.get(),
        move |_, _, _| shell.nav.update(NavState::close_menu),
        false,
    );

    view! {
        <nav class="fixed inset-x-0 top-0 z-[1000] flex items-center justify-between h-[60px] px-8 bg-[#fffbf3]">
            <div class="flex items-center gap-8">
                <span class="flex items-center gap-2 font-semibold">
                    <LogoIcon />
                    {SITE_TITLE}
                </span>
                <div class="hidden md:flex items-center gap-6">
                    <A href="/work" attr:class=LINK_CLASS>
                        "Work"
                    </A>
                    <A href="/about" attr:class=LINK_CLASS>
                        "About"
                    </A>
                    <button class=BUTTON_CLASS on:click=move |_| shell.view_resume()>
                        "Resume"
                    </button>
                </div>
            </div>
            <div class="flex items-center gap-6">
                <IconLink href=mailto() label="Email" icon="extra-email" />
                <IconLink href=LINKEDIN_URL label="LinkedIn" icon="devicon-linkedin-plain" />
                <button
                    class=format!("md:hidden text-2xl {BUTTON_CLASS}")
                    aria-label="Menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| shell.nav.update(NavState::toggle_menu)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="md:hidden absolute inset-x-0 top-[60px] flex flex-col gap-4 px-8 py-4 bg-[#fffbf3] shadow">
                                // the path watch misses taps on the current page
                                <A
                                    href="/work"
                                    attr:class=LINK_CLASS
                                    on:click=move |_| shell.nav.update(NavState::close_menu)
                                >
                                    "Work"
                                </A>
                                <A
                                    href="/about"
                                    attr:class=LINK_CLASS
                                    on:click=move |_| shell.nav.update(NavState::close_menu)
                                >
                                    "About"
                                </A>
                                <button
                                    class=format!("text-left {BUTTON_CLASS}")
                                    on:click=move |_| {
                                        shell.nav.update(NavState::close_menu);
                                        shell.view_resume();
                                    }
                                >
                                    "Resume"
                                </button>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

#[component]
fn IconLink(
    #[prop(into)] href: String,
    label: &'static str,
    icon: &'static str,
) -> impl IntoView {
    let external = href.starts_with("http");
    view! {
        <a
            href=href
            aria-label=label
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class="flex items-center no-underline text-2xl text-[#4a4a4a] transition-colors duration-200 hover:text-black"
        >
            <i class=icon />
        </a>
    }
}

/// Spinning logo mark. Clicking it fires a confetti burst and speeds the
/// rotation up until the burst ends.
#[component]
fn LogoIcon() -> impl IntoView {
    let (celebration, set_celebration) = signal(Celebration::default());
    let (angle, set_angle) = signal(0.0_f64);
    let spinner = StoredValue::new(Spinner::default());
    let burst = timer_slot();

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let fast = celebration.with_untracked(|c| c.is_active());
        if let Some(a) = spinner.try_update_value(|s| s.advance(args.delta, fast)) {
            set_angle.set(a);
        }
    });

    let celebrate = move |_: MouseEvent| {
        let Some(id) = set_celebration.try_update(Celebration::trigger) else {
            return;
        };
        log::debug!("confetti burst {id}");
        timer::schedule(burst, BURST_MS, move || {
            set_celebration.try_update(|c| c.expire(id));
        });
    };

    view! {
        <button
            class="relative flex items-center justify-center w-6 h-6 p-0 bg-transparent border-none cursor-pointer text-xl text-[#ff4800]"
            aria-label="Celebrate"
            on:click=celebrate
        >
            <span
                class="inline-block leading-none"
                style=move || format!("transform: rotate({:.2}deg);", angle.get())
            >
                "✺"
            </span>
            {move || {
                let c = celebration.get();
                c.is_active().then(|| view! { <Confetti seed=c.burst_id() /> })
            }}
        </button>
    }
}

#[component]
fn Confetti(seed: u32) -> impl IntoView {
    view! {
        <span class="pointer-events-none absolute left-1/2 top-1/2" aria-hidden="true">
            {confetti(seed, CONFETTI_COUNT)
                .into_iter()
                .map(|p| {
                    let style = format!(
                        "--dx: {:.1}px; --dy: {:.1}px; --rot: {:.0}deg; --hue: {}; animation-delay: {}ms;",
                        p.dx_px,
                        p.dy_px,
                        p.rotation_deg,
                        p.hue,
                        p.delay_ms,
                    );
                    view! { <span class="confetti-piece" style=style /> }
                })
                .collect_view()}
        </span>
    }
}
