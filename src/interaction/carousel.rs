/// Fraction of the visible track one snapped card occupies.
pub const CARD_WIDTH_FRACTION: f64 = 0.8;

/// Index of the card nearest to the scroll offset.
pub fn active_index(scroll_left: f64, track_width: f64) -> usize {
    let card_width = track_width * CARD_WIDTH_FRACTION;
    if !card_width.is_finite() || card_width <= 0.0 || !scroll_left.is_finite() {
        return 0;
    }
    (scroll_left.max(0.0) / card_width).round() as usize
}

/// Indicator-dot state for the mobile project carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTracker {
    project_count: usize,
    active_index: usize,
}

impl CarouselTracker {
    pub fn new(project_count: usize) -> Self {
        Self {
            project_count,
            active_index: 0,
        }
    }

    pub fn on_scroll(&mut self, scroll_left: f64, track_width: f64) -> usize {
        let last = self.project_count.saturating_sub(1);
        self.active_index = active_index(scroll_left, track_width).min(last);
        self.active_index
    }

    pub fn active_index(self) -> usize {
        self.active_index
    }

    pub fn is_active(self, index: usize) -> bool {
        index == self.active_index && index < self.project_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_index() {
        let w = 400.0;
        assert_eq!(active_index(0.0, w), 0);
        assert_eq!(active_index(0.8 * w, w), 1);
        assert_eq!(active_index(0.8 * w * 3.0, w), 3);
        // rounds to the nearest card
        assert_eq!(active_index(0.8 * w * 1.45, w), 1);
        assert_eq!(active_index(0.8 * w * 1.55, w), 2);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(active_index(120.0, 0.0), 0);
        assert_eq!(active_index(-50.0, 400.0), 0);
        assert_eq!(active_index(f64::NAN, 400.0), 0);
    }

    #[test]
    fn test_tracker_clamps_to_project_count() {
        let mut tracker = CarouselTracker::new(6);
        assert_eq!(tracker.on_scroll(320.0, 400.0), 1);
        assert!(tracker.is_active(1));
        assert!(!tracker.is_active(0));

        assert_eq!(tracker.on_scroll(10_000.0, 400.0), 5);
        assert!(tracker.is_active(5));

        let mut empty = CarouselTracker::new(0);
        assert_eq!(empty.on_scroll(320.0, 400.0), 0);
        assert!(!empty.is_active(0));
    }
}
