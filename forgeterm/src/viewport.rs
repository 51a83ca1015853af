//! Viewport and responsive layout math.
//!
//! Pure functions over pixel geometry: which logical lines are inside
//! the viewport, and which breakpoint-driven rendering parameters the
//! host should use. Nothing here touches buffer contents; resize
//! handlers recompute a `ViewportState` and trigger a re-render.

use serde::{Deserialize, Serialize};

/// Width thresholds in CSS pixels
const MOBILE_MAX_WIDTH: u32 = 640;
const TABLET_MAX_WIDTH: u32 = 1024;

/// Viewport-width class driving rendering parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn classify(width_px: u32) -> Self {
        if width_px <= MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if width_px <= TABLET_MAX_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Which ASCII-art logo variant downstream renderers select
    pub fn logo_variant(self) -> LogoVariant {
        match self {
            Breakpoint::Mobile => LogoVariant::Compact,
            Breakpoint::Tablet => LogoVariant::Medium,
            Breakpoint::Desktop => LogoVariant::Full,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogoVariant {
    Compact,
    Medium,
    Full,
}

/// Safe-area insets in pixels (notches, home indicators)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SafeAreaInsets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// The logical line window a scroll position exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start_line: u32,
    pub end_line: u32,
    pub visible_line_count: u32,
}

/// Compute the visible line window for a scroll position.
///
/// `overscan_lines` extra lines past the fold are included to reduce
/// scroll jank.
pub fn visible_range(
    scroll_offset_px: u32,
    viewport_height_px: u32,
    line_height_px: u32,
    overscan_lines: u32,
) -> VisibleRange {
    // A degenerate line height renders as one pixel rather than
    // dividing by zero.
    let line_height = line_height_px.max(1);
    let start_line = scroll_offset_px / line_height;
    let visible_line_count = viewport_height_px.div_ceil(line_height);
    VisibleRange {
        start_line,
        end_line: start_line + visible_line_count + overscan_lines,
        visible_line_count,
    }
}

/// Whether a line's pixel span intersects the viewport span
pub fn is_line_visible(
    line_number: u32,
    scroll_offset_px: u32,
    viewport_height_px: u32,
    line_height_px: u32,
) -> bool {
    let line_height = line_height_px.max(1);
    let top = line_number * line_height;
    let bottom = top + line_height;
    top <= scroll_offset_px + viewport_height_px && bottom >= scroll_offset_px
}

/// Derived layout state, recomputed wholesale on resize/orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportState {
    pub scroll_offset: u32,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub line_height_px: u32,
    pub char_width_px: u32,
    pub rows: u16,
    pub cols: u16,
    pub breakpoint: Breakpoint,
    pub is_touch_device: bool,
    pub safe_area: SafeAreaInsets,
}

impl ViewportState {
    /// Derive the full layout state from raw window geometry
    pub fn compute(
        viewport_width: u32,
        viewport_height: u32,
        line_height_px: u32,
        char_width_px: u32,
        scroll_offset: u32,
        is_touch_device: bool,
        safe_area: SafeAreaInsets,
    ) -> Self {
        let line_height = line_height_px.max(1);
        let char_width = char_width_px.max(1);
        let usable_width = viewport_width.saturating_sub(safe_area.left + safe_area.right);
        let usable_height = viewport_height.saturating_sub(safe_area.top + safe_area.bottom);

        ViewportState {
            scroll_offset,
            viewport_width,
            viewport_height,
            line_height_px: line_height,
            char_width_px: char_width,
            rows: (usable_height / line_height).clamp(1, u16::MAX as u32) as u16,
            cols: (usable_width / char_width).clamp(1, u16::MAX as u32) as u16,
            breakpoint: Breakpoint::classify(viewport_width),
            is_touch_device,
            safe_area,
        }
    }

    pub fn visible_range(&self, overscan_lines: u32) -> VisibleRange {
        visible_range(
            self.scroll_offset,
            self.viewport_height,
            self.line_height_px,
            overscan_lines,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_thresholds() {
        assert_eq!(Breakpoint::classify(320), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(640), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(641), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1024), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1025), Breakpoint::Desktop);
    }

    #[test]
    fn test_logo_variant_per_breakpoint() {
        assert_eq!(Breakpoint::Mobile.logo_variant(), LogoVariant::Compact);
        assert_eq!(Breakpoint::Tablet.logo_variant(), LogoVariant::Medium);
        assert_eq!(Breakpoint::Desktop.logo_variant(), LogoVariant::Full);
    }

    #[test]
    fn test_visible_range_math() {
        // 600px viewport, 20px lines, scrolled 250px down, 5 overscan
        let range = visible_range(250, 600, 20, 5);
        assert_eq!(range.start_line, 12); // floor(250 / 20)
        assert_eq!(range.visible_line_count, 30); // ceil(600 / 20)
        assert_eq!(range.end_line, 47);
    }

    #[test]
    fn test_visible_range_partial_line_rounds_up() {
        let range = visible_range(0, 610, 20, 0);
        assert_eq!(range.visible_line_count, 31);
    }

    #[test]
    fn test_visible_range_zero_line_height() {
        let range = visible_range(100, 50, 0, 0);
        assert_eq!(range.start_line, 100);
        assert_eq!(range.visible_line_count, 50);
    }

    #[test]
    fn test_is_line_visible() {
        // Viewport covers pixels 200..=500
        assert!(!is_line_visible(5, 200, 300, 20)); // span 100..120
        assert!(is_line_visible(10, 200, 300, 20)); // span 200..220
        assert!(is_line_visible(24, 200, 300, 20)); // span 480..500
        assert!(!is_line_visible(30, 200, 300, 20)); // span 600..620
    }

    #[test]
    fn test_viewport_state_rows_cols() {
        let state = ViewportState::compute(800, 600, 20, 8, 0, false, SafeAreaInsets::default());
        assert_eq!(state.rows, 30);
        assert_eq!(state.cols, 100);
        assert_eq!(state.breakpoint, Breakpoint::Tablet);
    }

    #[test]
    fn test_viewport_state_safe_area_shrinks_grid() {
        let insets = SafeAreaInsets {
            top: 40,
            bottom: 20,
            left: 8,
            right: 8,
        };
        let state = ViewportState::compute(816, 660, 20, 8, 0, true, insets);
        assert_eq!(state.rows, 30);
        assert_eq!(state.cols, 100);
        assert!(state.is_touch_device);
    }

    #[test]
    fn test_viewport_state_never_zero_grid() {
        let state = ViewportState::compute(0, 0, 20, 8, 0, false, SafeAreaInsets::default());
        assert_eq!(state.rows, 1);
        assert_eq!(state.cols, 1);
    }
}
