//! Tests for gradient magnitude and direction

#[cfg(test)]
mod tests {
    use jigsolve::edge::direction::EdgeDirection;
    use jigsolve::edge::pipeline::Step;
    use jigsolve::edge::sobel::SobelFilter;
    use jigsolve::spatial::grid::{PixelGrid, Raster};
    use std::f64::consts::PI;

    fn vertical_step() -> PixelGrid {
        let row = vec![0, 0, 0, 100, 100, 100];
        PixelGrid::from_rows(&vec![row; 6])
    }

    // Tests the axis special cases of the direction formula
    // Verified by routing axis responses through atan2
    #[test]
    fn test_gradient_direction_cases() {
        assert_eq!(SobelFilter::gradient_direction(0, 0), None);
        assert_eq!(SobelFilter::gradient_direction(0, 7), Some(0.0));
        assert_eq!(SobelFilter::gradient_direction(-3, 0), Some(PI / 2.0));
        let diagonal = SobelFilter::gradient_direction(1, 1).expect("defined");
        assert!((diagonal - (PI / 4.0 + PI)).abs() < 1e-12);
    }

    // Tests a vertical intensity step yields a north-south edge
    #[test]
    fn test_vertical_step_edge() {
        let mut grid = vertical_step();
        SobelFilter::new()
            .expect("kernels build")
            .apply(&mut grid)
            .expect("sobel succeeds");

        for y in 0..6 {
            assert_eq!(grid.intensity(2, y), 400);
            assert_eq!(grid.intensity(3, y), 400);
            assert_eq!(
                EdgeDirection::classify(grid.direction(2, y)),
                Some(EdgeDirection::NorthSouth)
            );
        }
    }

    // Tests flat regions have zero magnitude and undefined direction
    #[test]
    fn test_flat_region_undefined() {
        let mut grid = vertical_step();
        SobelFilter::new()
            .expect("kernels build")
            .apply(&mut grid)
            .expect("sobel succeeds");
        assert_eq!(grid.intensity(0, 3), 0);
        assert_eq!(grid.direction(0, 3), None);
        assert_eq!(grid.direction(5, 0), None);
    }
}
