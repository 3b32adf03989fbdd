/// Index to move focus to when Tab leaves a trapped region, or `None` to
/// let the browser move focus normally.
///
/// Focus only wraps at the edges: Tab on the last element goes to the
/// first, Shift+Tab on the first goes to the last. Focus outside the
/// region is pulled back in.
pub fn next_focus_index(current: Option<usize>, len: usize, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (current, backwards) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(0), true) => Some(last),
        (Some(i), false) if i >= last => Some(0),
        _ => None,
    }
}

pub const MENU_TOGGLE_ID: &str = "mobile-menu-toggle";
pub const MENU_ITEMS_ID: &str = "mobile-menu-items";

/// Where focus goes when the overlay opens or closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    FirstItem,
    Toggle,
}

impl FocusTarget {
    pub fn selector(&self) -> String {
        match self {
            FocusTarget::FirstItem => {
                format!("#{MENU_ITEMS_ID} a[href], #{MENU_ITEMS_ID} button")
            }
            FocusTarget::Toggle => format!("#{MENU_TOGGLE_ID}"),
        }
    }
}

/// Focus only moves on an actual open/close edge, never on first render.
pub fn focus_target(was_open: Option<bool>, open: bool) -> Option<FocusTarget> {
    match (was_open, open) {
        (Some(false), true) => Some(FocusTarget::FirstItem),
        (Some(true), false) => Some(FocusTarget::Toggle),
        _ => None,
    }
}

#[cfg(feature = "web")]
pub use web::{focus_first, set_scroll_locked, trap_focus, viewport_height};

#[cfg(feature = "web")]
mod web {
    use anyhow::{Result, anyhow};
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement, KeyboardEvent};

    use super::next_focus_index;

    const FOCUSABLE: &str = "a[href], button:not([disabled]), [tabindex]:not([tabindex='-1'])";

    fn body() -> Result<HtmlElement> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or_else(|| anyhow!("document has no body"))
    }

    /// Stops the page behind the overlay from scrolling.
    pub fn set_scroll_locked(locked: bool) -> Result<()> {
        let style = body()?.style();
        let res = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        res.map_err(|e| anyhow!("failed to update body overflow: {e:?}"))
    }

    pub fn viewport_height() -> Option<f64> {
        web_sys::window()?.inner_height().ok()?.as_f64()
    }

    /// Focuses the first element under `container` matching `selector`.
    /// Returns `false` when nothing matched.
    pub fn focus_first(container: &Element, selector: &str) -> Result<bool> {
        let found = container
            .query_selector(selector)
            .map_err(|e| anyhow!("bad focus selector {selector:?}: {e:?}"))?;
        let Some(el) = found.and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
            return Ok(false);
        };
        el.focus().map_err(|e| anyhow!("failed to move focus: {e:?}"))?;
        Ok(true)
    }

    /// Keeps Tab/Shift+Tab cycling inside `container`.
    pub fn trap_focus(container: &Element, ev: &KeyboardEvent) -> Result<()> {
        if ev.key() != "Tab" {
            return Ok(());
        }

        let nodes = container
            .query_selector_all(FOCUSABLE)
            .map_err(|e| anyhow!("bad focus selector: {e:?}"))?;
        let focusable: Vec<HtmlElement> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
            .collect();

        let active = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.active_element());
        let current = active.and_then(|a| {
            focusable
                .iter()
                .position(|el| el.unchecked_ref::<Element>() == &a)
        });

        if let Some(next) = next_focus_index(current, focusable.len(), ev.shift_key()) {
            ev.prevent_default();
            focusable[next]
                .focus()
                .map_err(|e| anyhow!("failed to move focus: {e:?}"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_wraps_from_last_to_first() {
        assert_eq!(next_focus_index(Some(2), 3, false), Some(0));
        assert_eq!(next_focus_index(Some(0), 3, true), Some(2));
    }

    #[test]
    fn tab_inside_the_region_is_left_alone() {
        assert_eq!(next_focus_index(Some(0), 3, false), None);
        assert_eq!(next_focus_index(Some(1), 3, true), None);
    }

    #[test]
    fn focus_outside_is_pulled_in() {
        assert_eq!(next_focus_index(None, 3, false), Some(0));
        assert_eq!(next_focus_index(None, 3, true), Some(2));
    }

    #[test]
    fn empty_region_never_traps() {
        assert_eq!(next_focus_index(None, 0, false), None);
        assert_eq!(next_focus_index(Some(0), 0, true), None);
    }

    #[test]
    fn opening_focuses_the_first_item_and_closing_the_toggle() {
        assert_eq!(focus_target(Some(false), true), Some(FocusTarget::FirstItem));
        assert_eq!(focus_target(Some(true), false), Some(FocusTarget::Toggle));
    }

    #[test]
    fn first_render_and_repeats_leave_focus_alone() {
        assert_eq!(focus_target(None, false), None);
        assert_eq!(focus_target(None, true), None);
        assert_eq!(focus_target(Some(true), true), None);
        assert_eq!(focus_target(Some(false), false), None);
    }

    #[test]
    fn focus_selectors_target_the_menu_ids() {
        assert_eq!(FocusTarget::Toggle.selector(), "#mobile-menu-toggle");
        assert_eq!(
            FocusTarget::FirstItem.selector(),
            "#mobile-menu-items a[href], #mobile-menu-items button"
        );
    }

    #[test]
    fn single_element_keeps_focus() {
        assert_eq!(next_focus_index(Some(0), 1, false), Some(0));
        assert_eq!(next_focus_index(Some(0), 1, true), Some(0));
    }
}
