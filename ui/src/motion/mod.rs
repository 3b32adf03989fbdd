//! Declarative animation variants resolved to inline CSS.
//!
//! A component picks a [`Variant`] from its state and asks the helpers in
//! [`variants`] for the matching style string; the browser interpolates
//! between the two through CSS transitions.

pub mod presence;
pub mod variants;

pub use presence::PresenceState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Open,
    Closed,
}

impl Variant {
    pub fn from_open(open: bool) -> Self {
        if open { Variant::Open } else { Variant::Closed }
    }

    /// Value for `data-state` attributes.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Open => "open",
            Variant::Closed => "closed",
        }
    }
}

const EASE_OVERSHOOT: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";
const EASE_SETTLE: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

const MIN_SPRING_SECS: f32 = 0.1;
const MAX_SPRING_SECS: f32 = 2.0;

/// Damped harmonic spring, unit mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    pub const fn new(stiffness: f32) -> Self {
        Self { stiffness, damping: 10.0 }
    }

    pub const fn damping(self, damping: f32) -> Self {
        Self { damping, ..self }
    }

    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * self.stiffness.sqrt())
    }

    /// Time for the envelope to decay to ~2% of the travel.
    pub fn settle_secs(&self) -> f32 {
        let omega = self.stiffness.sqrt();
        let zeta = self.damping_ratio();
        let rate = if zeta < 1.0 {
            zeta * omega
        } else {
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        (4.0 / rate).clamp(MIN_SPRING_SECS, MAX_SPRING_SECS)
    }

    pub fn easing(&self) -> &'static str {
        if self.damping_ratio() < 1.0 { EASE_OVERSHOOT } else { EASE_SETTLE }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Timing {
    Spring(Spring),
    Tween { secs: f32, easing: &'static str },
}

impl Timing {
    pub const fn tween(secs: f32) -> Self {
        Timing::Tween { secs, easing: "ease" }
    }

    pub fn secs(&self) -> f32 {
        match self {
            Timing::Spring(spring) => spring.settle_secs(),
            Timing::Tween { secs, .. } => *secs,
        }
    }

    pub fn easing(&self) -> &'static str {
        match self {
            Timing::Spring(spring) => spring.easing(),
            Timing::Tween { easing, .. } => easing,
        }
    }
}

/// One entry of a CSS `transition` list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub property: &'static str,
    pub timing: Timing,
    pub delay: f32,
}

impl Transition {
    pub const fn new(property: &'static str, timing: Timing) -> Self {
        Self { property, timing, delay: 0.0 }
    }

    pub const fn delay(self, delay: f32) -> Self {
        Self { delay, ..self }
    }

    pub fn css(&self) -> String {
        format!(
            "{} {}ms {} {}ms",
            self.property,
            to_ms(self.timing.secs()),
            self.timing.easing(),
            to_ms(self.delay)
        )
    }

    /// Milliseconds until this transition has finished.
    pub fn end_ms(&self) -> u32 {
        to_ms(self.delay + self.timing.secs())
    }
}

pub fn transition_css(transitions: &[Transition]) -> String {
    transitions.iter().map(Transition::css).collect::<Vec<_>>().join(", ")
}

pub(crate) fn to_ms(secs: f32) -> u32 {
    (secs * 1000.0).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_follows_open_flag() {
        assert_eq!(Variant::from_open(true), Variant::Open);
        assert_eq!(Variant::from_open(false).name(), "closed");
    }

    #[test]
    fn stiff_underdamped_spring_overshoots() {
        let spring = Spring::new(1000.0);
        assert!(spring.damping_ratio() < 1.0);
        assert_eq!(spring.easing(), EASE_OVERSHOOT);
        assert_eq!(to_ms(spring.settle_secs()), 800);
    }

    #[test]
    fn critically_damped_spring_settles_without_overshoot() {
        let spring = Spring::new(400.0).damping(40.0);
        assert_eq!(spring.damping_ratio(), 1.0);
        assert_eq!(spring.easing(), EASE_SETTLE);
        assert_eq!(to_ms(spring.settle_secs()), 200);
    }

    #[test]
    fn soft_spring_is_slow_but_capped() {
        let soft = Spring::new(20.0);
        let secs = soft.settle_secs();
        assert!(secs > 1.0 && secs <= MAX_SPRING_SECS, "{secs}");
        assert_eq!(Spring::new(0.5).settle_secs(), MAX_SPRING_SECS);
    }

    #[test]
    fn transition_renders_css_entry() {
        let t = Transition::new("opacity", Timing::tween(0.1)).delay(0.25);
        assert_eq!(t.css(), "opacity 100ms ease 250ms");
        assert_eq!(t.end_ms(), 350);

        let list = [t, Transition::new("d", Timing::tween(0.3))];
        assert_eq!(transition_css(&list), "opacity 100ms ease 250ms, d 300ms ease 0ms");
    }
}
