use std::collections::VecDeque;

/// Number of pointer samples kept for the cursor trail.
pub const TRAIL_CAPACITY: usize = 20;
/// Opacity lost per step back in the trail.
pub const OPACITY_STEP: f64 = 0.05;
/// Hue rotation (degrees) per step back in the trail.
pub const HUE_STEP: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorSample {
    pub x: f64,
    pub y: f64,
    pub id: u64,
    pub rotation: f64,
}

/// Bounded, most-recent-first sequence of pointer positions.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    samples: VecDeque<CursorSample>,
    capacity: usize,
    next_id: u64,
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(TRAIL_CAPACITY)
    }
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
            next_id: 1,
        }
    }

    /// Records a pointer position at the front of the trail and drops
    /// whatever falls past capacity. `rotation` is wrapped into [0, 360).
    pub fn push(&mut self, x: f64, y: f64, rotation: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        // rem_euclid rounds tiny negatives up to exactly 360
        let rotation = match rotation.rem_euclid(360.0) {
            r if r >= 360.0 => 0.0,
            r => r,
        };
        self.samples.push_front(CursorSample {
            x,
            y,
            id,
            rotation,
        });
        self.samples.truncate(self.capacity);
        id
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CursorSample> {
        self.samples.iter()
    }
}

/// Marker opacity for the sample at `index` (0 = newest).
pub fn marker_opacity(index: usize) -> f64 {
    (1.0 - index as f64 * OPACITY_STEP).max(0.0)
}

/// Marker hue in degrees for the sample at `index`.
pub fn marker_hue(index: usize) -> u32 {
    (index as u32 * HUE_STEP) % 360
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(buffer: &mut TrailBuffer, n: usize) -> Vec<u64> {
        (1..=n)
            .map(|i| buffer.push(i as f64, (i * 2) as f64, 0.0))
            .collect()
    }

    #[test]
    fn test_keeps_most_recent_first() {
        let mut buffer = TrailBuffer::default();
        fill(&mut buffer, 3);
        let xs = buffer.iter().map(|s| s.x).collect::<Vec<_>>();
        assert_eq!(xs, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_twenty_five_moves_keep_last_twenty() {
        let mut buffer = TrailBuffer::default();
        let ids = fill(&mut buffer, 25);
        assert_eq!(buffer.len(), TRAIL_CAPACITY);

        let kept = buffer.iter().map(|s| s.id).collect::<Vec<_>>();
        let expected = ids[5..].iter().rev().copied().collect::<Vec<_>>();
        assert_eq!(kept, expected);
        for dropped in &ids[..5] {
            assert!(!kept.contains(dropped));
        }
    }

    #[test]
    fn test_bounded_for_any_length() {
        for n in [0, 1, 19, 20, 21, 100] {
            let mut buffer = TrailBuffer::default();
            fill(&mut buffer, n);
            assert_eq!(buffer.len(), n.min(TRAIL_CAPACITY));
            let xs = buffer.iter().map(|s| s.x as usize).collect::<Vec<_>>();
            let expected = (1..=n).rev().take(TRAIL_CAPACITY).collect::<Vec<_>>();
            assert_eq!(xs, expected);
        }
    }

    #[test]
    fn test_ids_increase() {
        let mut buffer = TrailBuffer::new(3);
        let ids = fill(&mut buffer, 10);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rotation_wraps() {
        let mut buffer = TrailBuffer::default();
        buffer.push(0.0, 0.0, 360.0);
        buffer.push(0.0, 0.0, -90.0);
        let rotations = buffer.iter().map(|s| s.rotation).collect::<Vec<_>>();
        assert_eq!(rotations, vec![270.0, 0.0]);
    }

    #[test]
    fn test_rotation_stays_below_full_turn() {
        let mut buffer = TrailBuffer::default();
        for rotation in [-1e-20, -f64::EPSILON, 359.999_999, 720.0] {
            buffer.push(0.0, 0.0, rotation);
        }
        for sample in buffer.iter() {
            assert!((0.0..360.0).contains(&sample.rotation), "{}", sample.rotation);
        }
    }

    #[test]
    fn test_marker_falloff() {
        assert_eq!(marker_opacity(0), 1.0);
        assert!((marker_opacity(10) - 0.5).abs() < 1e-9);
        assert!(marker_opacity(19) > 0.0);
        assert_eq!(marker_opacity(40), 0.0);
        assert_eq!(marker_hue(0), 0);
        assert_eq!(marker_hue(3), 60);
        assert_eq!(marker_hue(18), 0);
    }
}
