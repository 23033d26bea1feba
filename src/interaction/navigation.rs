use url::Url;

use super::LayoutMode;
use crate::projects::ProjectRecord;
use crate::site::RESUME_PATH;

/// Where a user intent to view a resource ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// In-page overlay viewer.
    InPage(String),
    /// New browsing context.
    External(String),
}

/// Narrow layouts skip the in-page viewer for the resume.
pub fn select_resume(layout: LayoutMode) -> Destination {
    if layout.is_narrow() {
        Destination::External(RESUME_PATH.to_string())
    } else {
        Destination::InPage(RESUME_PATH.to_string())
    }
}

pub fn select_project(project: &ProjectRecord, layout: LayoutMode) -> Destination {
    select_link(&project.link, project.external_only, layout)
}

pub fn select_link(link: &Url, external_only: bool, layout: LayoutMode) -> Destination {
    if external_only || layout.is_narrow() {
        Destination::External(link.to_string())
    } else {
        Destination::InPage(link.to_string())
    }
}

/// Shell flags that are not overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn menu_open(self) -> bool {
        self.menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::projects;

    #[test]
    fn test_external_only_project_never_in_page() {
        let projects = projects().unwrap();
        assert_eq!(projects.len(), 6);
        let urban_piper = projects
            .iter()
            .find(|p| p.title == "Urban Piper")
            .expect("Urban Piper should be registered");

        for layout in [LayoutMode::Narrow, LayoutMode::Wide] {
            assert_eq!(
                select_project(urban_piper, layout),
                Destination::External(urban_piper.link.to_string()),
                "{layout:?} opened in page"
            );
        }
    }

    #[test]
    fn test_project_destination_by_layout() {
        let projects = projects().unwrap();
        for project in projects.iter().filter(|p| !p.external_only) {
            assert_eq!(
                select_project(project, LayoutMode::Wide),
                Destination::InPage(project.link.to_string())
            );
            assert_eq!(
                select_project(project, LayoutMode::Narrow),
                Destination::External(project.link.to_string())
            );
        }
    }

    #[test]
    fn test_resume_on_narrow_is_external() {
        let dest = select_resume(LayoutMode::from_width(390.0));
        assert_eq!(dest, Destination::External(RESUME_PATH.to_string()));

        let dest = select_resume(LayoutMode::from_width(1280.0));
        assert_eq!(dest, Destination::InPage(RESUME_PATH.to_string()));
    }

    #[test]
    fn test_menu_flag() {
        let mut nav = NavState::default();
        assert!(!nav.menu_open());
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.close_menu();
        nav.close_menu();
        assert!(!nav.menu_open());
    }
}
