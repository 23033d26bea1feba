use leptos::{ev::MouseEvent, prelude::*};

use super::timer::{self, TimerSlot};
use crate::interaction::{overlay::OVERLAY_TRANSITION_MS, OpenOutcome, Overlay, OverlayPhase};

/// Owns one overlay's state and its pending entry/exit transition.
#[derive(Clone, Copy)]
pub struct OverlayDriver {
    name: &'static str,
    overlay: RwSignal<Overlay<String>>,
    transition: TimerSlot,
}

impl OverlayDriver {
    pub fn new(name: &'static str, overlay: Overlay<String>) -> Self {
        Self {
            name,
            overlay: RwSignal::new(overlay),
            transition: timer::timer_slot(),
        }
    }

    pub fn open(&self, payload: String) {
        match self.overlay.try_update(|o| o.open(payload)) {
            Some(Ok(OpenOutcome::Opening)) => {
                log::debug!("{} overlay opening", self.name);
                self.finish_transition(Overlay::entered);
            }
            Some(Ok(OpenOutcome::Queued)) => {
                log::debug!("{} overlay reopens after its exit", self.name);
            }
            Some(Err(e)) => log::warn!("{} {e}", self.name),
            None => {}
        }
    }

    pub fn close(&self) {
        if self.overlay.try_update(|o| o.close()).unwrap_or(false) {
            log::debug!("{} overlay closing", self.name);
            // replaces a pending entry completion
            self.finish_transition(Overlay::exited);
        }
    }

    pub fn loaded(&self) {
        self.overlay.update(Overlay::loaded);
    }

    fn finish_transition(&self, step: fn(&mut Overlay<String>)) {
        let driver = *self;
        timer::schedule(self.transition, OVERLAY_TRANSITION_MS, move || {
            let Some(phase) = driver.overlay.try_update(|o| {
                step(o);
                o.phase()
            }) else {
                return;
            };
            log::debug!("{} overlay {phase}", driver.name);
            // an open queued during the exit starts its own entry
            if phase == OverlayPhase::Opening {
                driver.finish_transition(Overlay::entered);
            }
        });
    }

    pub fn is_rendered(&self) -> Memo<bool> {
        let overlay = self.overlay;
        Memo::new(move |_| overlay.with(Overlay::is_rendered))
    }

    pub fn phase(&self) -> Memo<OverlayPhase> {
        let overlay = self.overlay;
        Memo::new(move |_| overlay.with(Overlay::phase))
    }

    pub fn payload(&self) -> Memo<Option<String>> {
        let overlay = self.overlay;
        Memo::new(move |_| overlay.with(|o| o.payload().cloned()))
    }

    pub fn loading(&self) -> Memo<bool> {
        let overlay = self.overlay;
        Memo::new(move |_| overlay.with(Overlay::shows_placeholder))
    }
}

fn animation_class(phase: OverlayPhase) -> &'static str {
    match phase {
        OverlayPhase::Closing => "animate-overlay-out",
        _ => "animate-overlay-in",
    }
}

/// Backdrop, content box and close button shared by every overlay.
#[component]
pub fn OverlayShell(
    driver: OverlayDriver,
    label: &'static str,
    #[prop(optional)] content_class: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let rendered = driver.is_rendered();
    let phase = driver.phase();

    move || {
        rendered.get().then(|| {
            view! {
                <div
                    class=move || {
                        format!(
                            "fixed inset-0 z-[2000] flex items-center justify-center bg-black/75 {}",
                            animation_class(phase.get()),
                        )
                    }
                    role="dialog"
                    aria-modal="true"
                    aria-label=label
                    on:click=move |_| driver.close()
                >
                    <div
                        class=format!(
                            "relative w-[95vw] h-[90vh] rounded-xl bg-white p-6 overlay-content {content_class}",
                        )
                        on:click=|ev: MouseEvent| ev.stop_propagation()
                    >
                        <button
                            class="absolute top-4 right-4 z-[2] flex items-center justify-center w-9 h-9 rounded-full bg-[#f0f0f0] text-[#333] text-2xl leading-none cursor-pointer transition-all duration-200 hover:bg-[#e0e0e0] hover:scale-105"
                            aria-label="Close"
                            on:click=move |_| driver.close()
                        >
                            "×"
                        </button>
                        {children()}
                    </div>
                </div>
            }
        })
    }
}
