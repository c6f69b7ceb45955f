/// Scroll offset (px) past which the navbar switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 20.0;

/// Normalized document scroll position in `[0.0, 1.0]`.
///
/// A document that fits in the viewport reports 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_short_document_has_no_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_top_to_bottom_is_monotonic() {
        let values = (0..=200)
            .map(|y| scroll_progress(y as f64 * 10.0, 3000.0, 1000.0))
            .collect::<Vec<_>>();
        assert_eq!(values.first(), Some(&0.0));
        assert_eq!(values.last(), Some(&1.0));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_header_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }
}
