/// Smallest viewer width, in pixels, still rendered with the desktop layout.
pub const DESKTOP_MIN_WIDTH: u32 = 698;

/// Discrete layout mode derived from a measured viewer width. Recomputed
/// once after the view is first laid out and again on every resize; pure
/// function of the width, no hysteresis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Desktop,
    Mobile,
}

impl LayoutMode {
    pub fn from_width(width: u32) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            LayoutMode::Desktop
        } else {
            LayoutMode::Mobile
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive_on_the_desktop_side() {
        assert_eq!(LayoutMode::from_width(698), LayoutMode::Desktop);
        assert_eq!(LayoutMode::from_width(697), LayoutMode::Mobile);
    }

    #[test]
    fn extremes() {
        assert_eq!(LayoutMode::from_width(0), LayoutMode::Mobile);
        assert_eq!(LayoutMode::from_width(2560), LayoutMode::Desktop);
    }
}
