use leptos::prelude::*;
use leptos_use::use_media_query;

use super::overlay::OverlayDriver;
use crate::interaction::{
    layout::NARROW_MEDIA_QUERY,
    navigation::{select_project, select_resume},
    Destination, LayoutMode, NavState, Overlay,
};
use crate::projects::ProjectRecord;

/// Top-level UI state owned by the app shell and handed to children through
/// context.
#[derive(Clone, Copy)]
pub struct ShellState {
    pub nav: RwSignal<NavState>,
    pub resume: OverlayDriver,
    /// Single slot shared by every project card.
    pub project: OverlayDriver,
    /// Layout used for rendering decisions.
    pub is_narrow: Signal<bool>,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(NavState::default()),
            resume: OverlayDriver::new("resume", Overlay::new()),
            project: OverlayDriver::new("project", Overlay::with_loading()),
            is_narrow: use_media_query(NARROW_MEDIA_QUERY),
        }
    }

    pub fn layout(&self) -> LayoutMode {
        LayoutMode::from(self.is_narrow.get())
    }

    pub fn view_resume(&self) {
        match select_resume(current_layout()) {
            Destination::External(url) => open_external(&url),
            Destination::InPage(path) => self.resume.open(path),
        }
    }

    pub fn view_project(&self, project: &ProjectRecord) {
        match select_project(project, current_layout()) {
            Destination::External(url) => open_external(&url),
            Destination::InPage(link) => self.project.open(link),
        }
    }

    pub fn close_overlays(&self) {
        self.resume.close();
        self.project.close();
    }
}

/// Layout at the moment of an interaction.
pub fn current_layout() -> LayoutMode {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(LayoutMode::from_width)
        .unwrap_or_default()
}

/// Opens `url` in a new browsing context.
pub fn open_external(url: &str) {
    match window().open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        Ok(_) => log::debug!("opened {url} externally"),
        Err(e) => log::warn!("couldn't open {url}: {e:?}"),
    }
}
