use rand::{rngs::StdRng, Rng, SeedableRng};

/// How long one confetti burst stays on screen.
pub const BURST_MS: u64 = 2000;
pub const CONFETTI_COUNT: usize = 28;
/// Rotation speed multiplier while a burst is active.
pub const FAST_SPIN_FACTOR: f64 = 8.0;
const SPIN_PERIOD_MS: f64 = 12_000.0;
const PALETTE: [u16; 5] = [16, 45, 130, 200, 330];

/// Confetti burst bookkeeping for the logo icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Celebration {
    burst_id: u32,
    active: bool,
}

impl Celebration {
    /// Starts a new burst, superseding any running one. Returns its id.
    pub fn trigger(&mut self) -> u32 {
        self.burst_id = self.burst_id.wrapping_add(1);
        self.active = true;
        self.burst_id
    }

    /// Ends the burst `burst_id` unless a newer one replaced it.
    pub fn expire(&mut self, burst_id: u32) {
        if burst_id == self.burst_id {
            self.active = false;
        }
    }

    pub fn is_active(self) -> bool {
        self.active
    }

    pub fn burst_id(self) -> u32 {
        self.burst_id
    }
}

/// Continuous rotation of the logo icon, advanced once per animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spinner {
    angle_deg: f64,
}

impl Spinner {
    pub fn advance(&mut self, delta_ms: f64, fast: bool) -> f64 {
        let delta_ms = if delta_ms.is_finite() { delta_ms.max(0.0) } else { 0.0 };
        let factor = if fast { FAST_SPIN_FACTOR } else { 1.0 };
        self.angle_deg = (self.angle_deg + delta_ms * factor * 360.0 / SPIN_PERIOD_MS) % 360.0;
        self.angle_deg
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub dx_px: f64,
    pub dy_px: f64,
    pub rotation_deg: f64,
    pub hue: u16,
    pub delay_ms: u32,
}

/// Deterministic particle spread for burst `seed`, evenly fanned around the
/// icon with jittered distance.
pub fn confetti(seed: u32, count: usize) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    (0..count)
        .map(|i| {
            let base = i as f64 / count as f64 * std::f64::consts::TAU;
            let angle = base + rng.random_range(-0.2..=0.2);
            let distance: f64 = rng.random_range(60.0..=150.0);
            Particle {
                dx_px: angle.cos() * distance,
                dy_px: angle.sin() * distance,
                rotation_deg: rng.random_range(-360.0..=360.0),
                hue: PALETTE[rng.random_range(0..PALETTE.len())],
                delay_ms: rng.random_range(0..=150),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::effect::tests::handle;
    use crate::interaction::ActiveEffect;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_burst_supersedes_old() {
        let mut celebration = Celebration::default();
        let first = celebration.trigger();
        let second = celebration.trigger();
        assert_ne!(first, second);

        // the first burst's timeout fires late
        celebration.expire(first);
        assert!(celebration.is_active());

        celebration.expire(second);
        assert!(!celebration.is_active());
    }

    #[test]
    fn test_burst_timeouts_cancel_on_retrigger() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut celebration = Celebration::default();
        let mut effect = ActiveEffect::default();

        let id = celebration.trigger();
        effect.start(handle(id, &log), 0.0, BURST_MS as f64);
        let id = celebration.trigger();
        let left = effect.start(handle(id, &log), 500.0, BURST_MS as f64);
        assert_eq!(left, Some(1500.0));
        assert_eq!(*log.borrow(), vec![1]);
        assert!(celebration.is_active());

        // teardown
        assert!(effect.cancel());
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_spinner_rates() {
        let mut slow = Spinner::default();
        let mut fast = Spinner::default();
        assert!((slow.advance(1000.0, false) - 30.0).abs() < 1e-9);
        assert!((fast.advance(1000.0, true) - 240.0).abs() < 1e-9);

        // wraps and ignores bogus deltas
        assert!((slow.advance(SPIN_PERIOD_MS, false) - 30.0).abs() < 1e-9);
        slow.advance(-5.0, false);
        assert!((slow.advance(f64::NAN, true) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_confetti_is_deterministic() {
        let a = confetti(3, CONFETTI_COUNT);
        let b = confetti(3, CONFETTI_COUNT);
        let c = confetti(4, CONFETTI_COUNT);
        assert_eq!(a.len(), CONFETTI_COUNT);
        assert_eq!(a, b);
        assert_ne!(a, c);
        for p in &a {
            let distance = (p.dx_px.powi(2) + p.dy_px.powi(2)).sqrt();
            assert!((60.0 - 1e-9..=150.0 + 1e-9).contains(&distance));
            assert!(PALETTE.contains(&p.hue));
            assert!(p.delay_ms <= 150);
        }
    }
}
