/// Viewport width below which the mobile interaction policy applies.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Media query matching [`LayoutMode::Narrow`].
pub const NARROW_MEDIA_QUERY: &str = "(max-width: 767.98px)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    Narrow,
    #[default]
    Wide,
}

impl LayoutMode {
    pub fn from_width(width_px: f64) -> Self {
        if width_px < MOBILE_BREAKPOINT_PX {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Self::Narrow
    }
}

impl From<bool> for LayoutMode {
    /// Converts the result of matching [`NARROW_MEDIA_QUERY`].
    fn from(is_narrow: bool) -> Self {
        if is_narrow {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint() {
        assert_eq!(LayoutMode::from_width(375.0), LayoutMode::Narrow);
        assert_eq!(LayoutMode::from_width(767.9), LayoutMode::Narrow);
        assert_eq!(LayoutMode::from_width(768.0), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(1440.0), LayoutMode::Wide);
        assert!(LayoutMode::from(true).is_narrow());
        assert!(!LayoutMode::from(false).is_narrow());
    }
}
