//! Framework-free interaction model for the site: every state machine and
//! routing decision the view layer drives lives here, so it can be exercised
//! without a browser.

pub mod carousel;
pub mod celebration;
pub mod disclosure;
pub mod effect;
pub mod hover;
pub mod layout;
pub mod navigation;
pub mod overlay;

pub use carousel::CarouselTracker;
pub use celebration::{Celebration, Particle, Spinner};
pub use disclosure::Disclosure;
pub use effect::{ActiveEffect, CancelHandle};
pub use hover::{CardVisual, HoverCard};
pub use layout::LayoutMode;
pub use navigation::{Destination, NavState};
pub use overlay::{OpenOutcome, Overlay, OverlayError, OverlayPhase};
