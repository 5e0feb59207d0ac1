//! Scroll and layout thresholds: navbar shading, reveal-on-scroll, tooltip
//! placement and in-page anchor targets. All values are CSS pixels.

/// The navbar switches to its scrolled style past this offset.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// An element reveals once its top is this far above the viewport bottom.
pub const REVEAL_MARGIN: f64 = 100.0;

/// Gap between a tooltip and the element it describes.
pub const TOOLTIP_GAP: f64 = 8.0;

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// `element_top` is relative to the viewport, as from a bounding rect.
pub fn in_reveal_zone(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_MARGIN
}

/// Reveal state for the page's scroll-reveal elements. Revealing is one-way:
/// scrolling back up does not hide an element again.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(elements: usize) -> Self {
        Self {
            revealed: vec![false; elements],
        }
    }

    /// Checks every element against the current viewport and returns the
    /// indexes revealed by this pass. `tops` is indexed like the tracker;
    /// missing entries are skipped.
    pub fn check(&mut self, tops: &[f64], viewport_height: f64) -> Vec<usize> {
        let mut newly = Vec::new();
        for (i, (seen, top)) in self.revealed.iter_mut().zip(tops).enumerate() {
            if !*seen && in_reveal_zone(*top, viewport_height) {
                *seen = true;
                newly.push(i);
            }
        }
        newly
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}

/// Viewport-relative box of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Document position `(top, left)` of a tooltip centred above `anchor`.
pub fn tooltip_position(
    anchor: Rect,
    tooltip_width: f64,
    tooltip_height: f64,
    scroll_y: f64,
) -> (f64, f64) {
    let top = anchor.top - tooltip_height - TOOLTIP_GAP + scroll_y;
    let left = anchor.left + (anchor.width - tooltip_width) / 2.0;
    (top, left)
}

/// Element id an in-page link should smooth-scroll to. A bare `#` and
/// anything that is not a fragment link scroll nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
