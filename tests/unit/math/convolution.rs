//! Tests for kernel validation and clamped convolution

#[cfg(test)]
mod tests {
    use jigsolve::JigsawError;
    use jigsolve::math::convolution::{Kernel, apply_convolution};
    use jigsolve::spatial::grid::{PixelGrid, Raster};

    // Tests the 3x3 edge kernel on a column-major 3x3 grid with clamped borders
    // Verified by flipping the kernel index so that K[c + dx] is used
    #[test]
    fn test_edge_kernel_fixture() {
        let mut grid =
            PixelGrid::from_columns(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        let kernel = Kernel::from_rows(&[vec![-1, -2, -1], vec![0, 0, 0], vec![1, 2, 1]])
            .expect("valid kernel");

        apply_convolution(&kernel, &mut grid, false).expect("convolution succeeds");

        for y in 0..3 {
            assert_eq!(grid.intensity(0, y), -12);
            assert_eq!(grid.intensity(1, y), -24);
            assert_eq!(grid.intensity(2, y), -12);
        }
    }

    // Tests a normalized box blur of a constant image is the identity
    #[test]
    fn test_normalized_constant_image() {
        let mut grid = PixelGrid::from_rows(&vec![vec![10; 4]; 4]);
        let kernel = Kernel::from_rows(&vec![vec![1.0; 5]; 5]).expect("valid kernel");
        apply_convolution(&kernel, &mut grid, true).expect("convolution succeeds");
        assert!(grid.intensities().iter().all(|&value| value == 10));
    }

    // Tests normalization divides by the kernel sum and rounds half up
    // Verified by skipping the division when normalize is set
    #[test]
    fn test_normalized_rounding() {
        let mut grid = PixelGrid::from_rows(&[vec![0, 1, 0]]);
        let kernel = Kernel::from_rows(&[vec![0, 0, 0], vec![0, 1, 0], vec![0, 1, 0]])
            .expect("valid kernel");
        apply_convolution(&kernel, &mut grid, true).expect("convolution succeeds");
        // out(x) = (in(x) + in(x - 1)) / 2
        assert_eq!(grid.intensity(0, 0), 0);
        assert_eq!(grid.intensity(1, 0), 1);
        assert_eq!(grid.intensity(2, 0), 1);
    }

    // Tests an identity kernel leaves the image untouched
    #[test]
    fn test_identity_kernel() {
        let original = PixelGrid::from_rows(&[vec![1, 2], vec![3, 4]]);
        let mut grid = original.clone();
        let kernel = Kernel::from_offsets(3, |dx, dy| if dx == 0 && dy == 0 { 1.0 } else { 0.0 })
            .expect("odd side");
        apply_convolution(&kernel, &mut grid, false).expect("convolution succeeds");
        assert_eq!(grid, original);
    }

    // Tests non-square and even kernels are rejected
    // Verified by removing the odd side check
    #[test]
    fn test_invalid_kernels() {
        let even = Kernel::from_rows(&[vec![1, 1], vec![1, 1]]);
        assert!(matches!(even, Err(JigsawError::InvalidKernel { rows: 2, .. })));

        let ragged = Kernel::from_rows(&[vec![1, 1, 1], vec![1, 1], vec![1, 1, 1]]);
        assert!(matches!(
            ragged,
            Err(JigsawError::InvalidKernel {
                rows: 3,
                columns: 2
            })
        ));

        assert!(Kernel::from_offsets(4, |_, _| 1.0).is_err());
    }

    // Tests kernel accessors
    #[test]
    fn test_kernel_accessors() {
        let kernel = Kernel::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])
            .expect("valid kernel");
        assert_eq!(kernel.side(), 3);
        assert_eq!(kernel.radius(), 1);
        assert_eq!(kernel.weight(0, 2), 3.0);
        assert_eq!(kernel.sum(), 45.0);
    }
}
