//! Tests for memoized line scores

#[cfg(test)]
mod tests {
    use jigsolve::edge::direction::EdgeDirection;
    use jigsolve::judge::cache::{CacheStats, CachingCutJudge};
    use jigsolve::judge::cut::CutJudge;
    use std::cell::{Cell, RefCell};

    /// Scores a line by its first position and records every call
    #[derive(Default)]
    struct RecordingJudge {
        calls: Cell<usize>,
        seen: RefCell<Vec<Vec<(usize, usize)>>>,
    }

    impl CutJudge for &RecordingJudge {
        fn judge(
            &self,
            positions: &mut dyn Iterator<Item = (usize, usize)>,
            _cut_direction: EdgeDirection,
        ) -> f64 {
            self.calls.set(self.calls.get() + 1);
            let positions: Vec<_> = positions.collect();
            let score = positions.first().map_or(0.0, |&(x, y)| (x + y) as f64);
            self.seen.borrow_mut().push(positions);
            score
        }
    }

    // Tests repeated lines hit the cache
    // Verified by inserting without checking the cache first
    #[test]
    fn test_memoizes_lines() {
        let recorder = RecordingJudge::default();
        let mut cache = CachingCutJudge::new(&recorder, 5, 5);
        assert_eq!(cache.judge_horizontal(2), 3.0);
        assert_eq!(cache.judge_horizontal(2), 3.0);
        assert_eq!(cache.judge_vertical(2), 3.0);

        assert_eq!(recorder.calls.get(), 2);
        assert_eq!(cache.stats, CacheStats { hits: 1, misses: 2 });
    }

    // Tests lines exclude their first and last pixel
    #[test]
    fn test_interior_positions() {
        let recorder = RecordingJudge::default();
        let mut cache = CachingCutJudge::new(&recorder, 5, 4);
        cache.judge_horizontal(1);
        cache.judge_vertical(3);

        let seen = recorder.seen.borrow();
        assert_eq!(seen.first(), Some(&vec![(1, 1), (2, 1), (3, 1)]));
        assert_eq!(seen.get(1), Some(&vec![(3, 1), (3, 2)]));
    }

    // Tests every-N averaging over lines before the last row or column
    // Verified by bounding horizontal lines by the width
    #[test]
    fn test_every_uses_matching_dimension() {
        let recorder = RecordingJudge::default();
        let mut cache = CachingCutJudge::new(&recorder, 20, 5);
        assert_eq!(cache.judge_horizontal_every(2), 3.0);

        let recorder = RecordingJudge::default();
        let mut cache = CachingCutJudge::new(&recorder, 7, 7);
        assert_eq!(cache.judge_horizontal_every(2), 4.0);
        assert_eq!(cache.judge_vertical_every(3), 4.0);
    }

    // Tests spacings without any line have no score
    #[test]
    fn test_no_lines() {
        let recorder = RecordingJudge::default();
        let mut cache = CachingCutJudge::new(&recorder, 7, 7);
        assert_eq!(cache.judge_horizontal_every(6), f64::NEG_INFINITY);
        assert_eq!(cache.judge_vertical_every(0), f64::NEG_INFINITY);
        assert_eq!(recorder.calls.get(), 0);
    }
}
