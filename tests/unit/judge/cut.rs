//! Tests for the edge cut judge

#[cfg(test)]
mod tests {
    use jigsolve::edge::direction::EdgeDirection;
    use jigsolve::judge::cut::{CutJudge, EdgeCutJudge};
    use jigsolve::spatial::grid::{PixelGrid, RasterMut};

    const NORTH_SOUTH: Option<f64> = Some(0.0);

    fn with_pixels(pixels: &[(usize, usize, Option<f64>)]) -> PixelGrid {
        let mut grid = PixelGrid::new(6, 6);
        for &(x, y, direction) in pixels {
            grid.set_intensity(x, y, 9);
            grid.set_direction(x, y, direction);
        }
        grid
    }

    fn column(
        x: usize,
        rows: std::ops::Range<usize>,
        direction: Option<f64>,
    ) -> Vec<(usize, usize, Option<f64>)> {
        rows.map(|y| (x, y, direction)).collect()
    }

    fn judge_row(grid: &PixelGrid, y: usize) -> f64 {
        let mut positions = (0..6).map(|x| (x, y));
        EdgeCutJudge::new(grid).judge(&mut positions, EdgeDirection::EastWest)
    }

    // Tests an edge running straight through the line argues against a cut
    #[test]
    fn test_continuous_edge_is_valid() {
        let grid = with_pixels(&column(2, 0..6, NORTH_SOUTH));
        assert_eq!(judge_row(&grid, 3), -1.0);
    }

    // Tests an edge ending at the line argues for a cut
    // Verified by treating one-sided hits as ignored
    #[test]
    fn test_ending_edge_is_broken() {
        let grid = with_pixels(&column(2, 0..3, NORTH_SOUTH));
        assert_eq!(judge_row(&grid, 3), 1.0);
    }

    // Tests a direction change across the line counts as broken
    #[test]
    fn test_direction_change_is_broken() {
        let mut pixels = column(2, 0..3, NORTH_SOUTH);
        pixels.extend(column(2, 4..6, Some(std::f64::consts::PI / 4.0)));
        assert_eq!(judge_row(&with_pixels(&pixels), 3), 1.0);
    }

    // Tests edges parallel to the cut are ignored
    #[test]
    fn test_parallel_edges_ignored() {
        let east_west = Some(std::f64::consts::PI / 2.0);
        let pixels: Vec<_> = (0..6)
            .flat_map(|x| [(x, 2, east_west), (x, 4, east_west)])
            .collect();
        assert_eq!(judge_row(&with_pixels(&pixels), 3), 0.0);
    }

    // Tests mixed verdicts average out
    #[test]
    fn test_mixed_verdicts() {
        let mut pixels = column(1, 0..6, NORTH_SOUTH);
        pixels.extend(column(4, 0..3, NORTH_SOUTH));
        assert_eq!(judge_row(&with_pixels(&pixels), 3), 0.0);
    }

    // Tests the halo reaches two pixels and no further
    // Verified by shrinking the halo to one pixel
    #[test]
    fn test_halo_reach() {
        let within = with_pixels(&[(2, 1, NORTH_SOUTH), (2, 5, NORTH_SOUTH)]);
        assert_eq!(judge_row(&within, 3), -1.0);
        let beyond = with_pixels(&[(2, 0, NORTH_SOUTH)]);
        assert_eq!(judge_row(&beyond, 3), 0.0);
    }

    // Tests vertical cuts look left and right
    #[test]
    fn test_vertical_cut() {
        let east_west = Some(std::f64::consts::PI / 2.0);
        let pixels: Vec<_> = (0..3).map(|x| (x, 2, east_west)).collect();
        let grid = with_pixels(&pixels);
        let mut positions = (0..6).map(|y| (3, y));
        let judge = EdgeCutJudge::new(&grid);
        assert_eq!(judge.judge(&mut positions, EdgeDirection::NorthSouth), 1.0);
        assert_eq!(judge.dimensions(), (6, 6));
    }

    // Tests an image without edges and diagonal cuts give no signal
    #[test]
    fn test_no_signal() {
        assert_eq!(judge_row(&PixelGrid::new(6, 6), 3), 0.0);
        let grid = with_pixels(&column(2, 0..3, NORTH_SOUTH));
        let mut positions = (0..6).map(|x| (x, 3));
        let score =
            EdgeCutJudge::new(&grid).judge(&mut positions, EdgeDirection::SoutheastNorthwest);
        assert_eq!(score, 0.0);
    }
}
