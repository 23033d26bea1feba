/// Height transition of a project card.
pub const CARD_TRANSITION_MS: u64 = 700;
/// Transition of the image, gradient and text layers inside a card.
pub const LAYER_TRANSITION_MS: u64 = 600;
pub const CARD_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum HoverTarget {
    #[default]
    Rest,
    Expanded,
}

/// Visual end state a card animates towards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    pub height_px: f64,
    pub image_scale: f64,
    pub image_opacity: f64,
    pub gradient_top: f64,
    pub gradient_bottom: f64,
    pub content_offset_px: f64,
}

impl CardVisual {
    pub const REST: Self = Self {
        height_px: 100.0,
        image_scale: 1.0,
        image_opacity: 0.95,
        gradient_top: 0.65,
        gradient_bottom: 0.4,
        content_offset_px: 0.0,
    };

    pub const EXPANDED: Self = Self {
        height_px: 400.0,
        image_scale: 1.05,
        image_opacity: 1.0,
        gradient_top: 0.6,
        gradient_bottom: 0.1,
        content_offset_px: 8.0,
    };
}

/// Pointer/focus expansion state of one card.
///
/// Each enter or leave retargets the transition and starts a new generation.
/// Completion reports carry the generation they belong to, so one from an
/// interrupted transition never marks the card as settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverCard {
    target: HoverTarget,
    generation: u32,
    settled: bool,
}

impl HoverCard {
    pub fn enter(&mut self) -> u32 {
        self.retarget(HoverTarget::Expanded)
    }

    pub fn leave(&mut self) -> u32 {
        self.retarget(HoverTarget::Rest)
    }

    fn retarget(&mut self, target: HoverTarget) -> u32 {
        self.target = target;
        self.generation = self.generation.wrapping_add(1);
        self.settled = false;
        self.generation
    }

    /// Marks the transition of `generation` as finished. Stale generations are
    /// ignored.
    pub fn settle(&mut self, generation: u32) -> bool {
        if generation == self.generation {
            self.settled = true;
        }
        self.settled
    }

    pub fn is_settled(self) -> bool {
        self.settled
    }

    pub fn visual(self) -> CardVisual {
        match self.target {
            HoverTarget::Rest => CardVisual::REST,
            HoverTarget::Expanded => CardVisual::EXPANDED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_then_leave_ends_at_rest() {
        let mut card = HoverCard::default();
        let entering = card.enter();
        let leaving = card.leave();

        // the interrupted enter transition reports late
        assert!(!card.settle(entering));
        assert_eq!(card.visual(), CardVisual::REST);

        assert!(card.settle(leaving));
        assert_eq!(card.visual(), CardVisual::REST);
    }

    #[test]
    fn test_rapid_toggling_does_not_compound() {
        let mut card = HoverCard::default();
        let mut last = 0;
        for _ in 0..10 {
            card.enter();
            last = card.leave();
        }
        let final_gen = card.enter();
        assert_ne!(last, final_gen);
        assert_eq!(card.visual(), CardVisual::EXPANDED);
        assert!(!card.settle(last));
        assert!(card.settle(final_gen));
    }

    #[test]
    fn test_cards_are_independent() {
        let mut cards = [HoverCard::default(); 3];
        cards[1].enter();
        assert_eq!(cards[0].visual(), CardVisual::REST);
        assert_eq!(cards[1].visual(), CardVisual::EXPANDED);
        assert_eq!(cards[2].visual(), CardVisual::REST);
    }
}
