use super::LayoutMode;

/// "Read more" toggle for a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    /// Wide layouts always show the full text, so the control is hidden there.
    pub fn control_visible(layout: LayoutMode) -> bool {
        layout.is_narrow()
    }

    /// Text classes: clamp to one line when collapsed on a narrow layout.
    pub fn clamp_class(self, layout: LayoutMode) -> &'static str {
        if layout.is_narrow() && !self.expanded {
            "line-clamp-1"
        } else {
            "line-clamp-none"
        }
    }

    pub fn label(self) -> &'static str {
        if self.expanded {
            "Read less"
        } else {
            "Read more"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut d = Disclosure::default();
        d.toggle();
        assert!(d.is_expanded());
        d.toggle();
        assert_eq!(d, Disclosure::default());
    }

    #[test]
    fn test_clamp_policy() {
        let mut d = Disclosure::default();
        assert_eq!(d.clamp_class(LayoutMode::Narrow), "line-clamp-1");
        assert_eq!(d.clamp_class(LayoutMode::Wide), "line-clamp-none");
        assert_eq!(d.label(), "Read more");

        d.toggle();
        assert_eq!(d.clamp_class(LayoutMode::Narrow), "line-clamp-none");
        assert_eq!(d.label(), "Read less");

        assert!(Disclosure::control_visible(LayoutMode::Narrow));
        assert!(!Disclosure::control_visible(LayoutMode::Wide));
    }
}
