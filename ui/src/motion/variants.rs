use super::{Spring, Timing, Transition, Variant, transition_css};

/// Toggle button centre, as seen from the overlay's top-right corner.
pub const CIRCLE_CENTER: &str = "calc(100vw - 32px) 32px";
pub const CLOSED_RADIUS_PX: f64 = 24.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 1000.0;

const CONTAINER_OPEN: Spring = Spring::new(20.0);
const CONTAINER_CLOSED: Spring = Spring::new(400.0).damping(40.0);
const CONTAINER_CLOSE_DELAY: f32 = 0.25;

const ITEM_Y: Spring = Spring::new(1000.0);
const ITEM_OFFSET_PX: u32 = 50;
const ITEM_FADE: Timing = Timing::tween(0.3);

const SUBMENU_HEIGHT: Timing = Timing::Tween { secs: 0.3, easing: "ease-in-out" };

const ICON_MORPH: Timing = Timing::tween(0.3);
const ICON_FADE: Timing = Timing::tween(0.1);

/// Radius of the clip circle when open: large enough to cover the viewport
/// from the toggle's corner.
pub fn open_radius_px(viewport_height: f64) -> f64 {
    viewport_height * 2.0 + 200.0
}

pub fn container_clip_path(variant: Variant, viewport_height: f64) -> String {
    let radius = match variant {
        Variant::Open => open_radius_px(viewport_height),
        Variant::Closed => CLOSED_RADIUS_PX,
    };
    format!("circle({radius}px at {CIRCLE_CENTER})")
}

fn container_transition(variant: Variant) -> Transition {
    match variant {
        Variant::Open => Transition::new("clip-path", Timing::Spring(CONTAINER_OPEN)),
        Variant::Closed => Transition::new("clip-path", Timing::Spring(CONTAINER_CLOSED))
            .delay(CONTAINER_CLOSE_DELAY),
    }
}

pub fn container_style(variant: Variant, viewport_height: f64) -> String {
    let clip = container_clip_path(variant, viewport_height);
    format!(
        "clip-path: {clip}; -webkit-clip-path: {clip}; transition: {};",
        container_transition(variant).css()
    )
}

/// Per-child delays of a list entering or leaving.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub step: f32,
    pub delay_children: f32,
    pub reverse: bool,
}

impl Stagger {
    pub fn delay_for(&self, index: usize, count: usize) -> f32 {
        let slot = if self.reverse {
            count.saturating_sub(index + 1)
        } else {
            index
        };
        self.delay_children + self.step * slot as f32
    }

    /// Delay of the last child to start.
    pub fn max_delay(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        self.delay_children + self.step * (count - 1) as f32
    }
}

pub fn list_stagger(variant: Variant) -> Stagger {
    match variant {
        Variant::Open => Stagger { step: 0.07, delay_children: 0.2, reverse: false },
        Variant::Closed => Stagger { step: 0.05, delay_children: 0.0, reverse: true },
    }
}

fn item_transitions(delay: f32) -> [Transition; 2] {
    [
        Transition::new("transform", Timing::Spring(ITEM_Y)).delay(delay),
        Transition::new("opacity", ITEM_FADE).delay(delay),
    ]
}

/// Style of the `index`-th of `count` list items.
pub fn item_style(variant: Variant, index: usize, count: usize) -> String {
    let (offset, opacity) = match variant {
        Variant::Open => (0, 1),
        Variant::Closed => (ITEM_OFFSET_PX, 0),
    };
    let delay = list_stagger(variant).delay_for(index, count);
    format!(
        "transform: translateY({offset}px); opacity: {opacity}; transition: {};",
        transition_css(&item_transitions(delay))
    )
}

/// How long a list of `count` items needs to finish its exit.
pub fn list_exit_ms(count: usize) -> u32 {
    let delay = list_stagger(Variant::Closed).max_delay(count);
    item_transitions(delay)
        .iter()
        .map(Transition::end_ms)
        .max()
        .unwrap_or(0)
}

/// Grid wrapper around a submenu. Animating the row track from `0fr` to
/// `1fr` grows the submenu's height, so the items below slide down instead
/// of jumping. The wrapper's child needs `min-height: 0; overflow: hidden`.
pub fn submenu_frame_style(variant: Variant) -> String {
    let rows = match variant {
        Variant::Open => "1fr",
        Variant::Closed => "0fr",
    };
    format!(
        "display: grid; grid-template-rows: {rows}; transition: {};",
        Transition::new("grid-template-rows", SUBMENU_HEIGHT).css()
    )
}

/// One stroke of the hamburger icon, morphing between two path shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconLine {
    pub closed: &'static str,
    pub open: &'static str,
}

pub const TOP_LINE: IconLine = IconLine {
    closed: "M 2 2.5 L 20 2.5",
    open: "M 3 16.5 L 17 2.5",
};

pub const BOTTOM_LINE: IconLine = IconLine {
    closed: "M 2 16.346 L 20 16.346",
    open: "M 3 2.5 L 17 16.346",
};

pub const MIDDLE_LINE_PATH: &str = "M 2 9.423 L 20 9.423";

impl IconLine {
    pub fn path(&self, variant: Variant) -> &'static str {
        match variant {
            Variant::Open => self.open,
            Variant::Closed => self.closed,
        }
    }

    pub fn style(&self, variant: Variant) -> String {
        format!(
            "d: path('{}'); transition: {};",
            self.path(variant),
            Transition::new("d", ICON_MORPH).css()
        )
    }
}

pub fn middle_line_style(variant: Variant) -> String {
    let opacity = match variant {
        Variant::Open => 0,
        Variant::Closed => 1,
    };
    format!(
        "opacity: {opacity}; transition: {};",
        Transition::new("opacity", ICON_FADE).css()
    )
}

pub fn chevron_style(expanded: bool) -> String {
    let transform = if expanded { "rotate(180deg)" } else { "none" };
    format!("transform: {transform}; transition: transform 0.2s ease;")
}
