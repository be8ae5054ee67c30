//! Tests for luminosity conversion

#[cfg(test)]
mod tests {
    use jigsolve::edge::greyscale::Greyscale;
    use jigsolve::edge::pipeline::Step;
    use jigsolve::spatial::grid::{PixelGrid, Raster, pack_rgb};

    // Tests channel weights of the luminosity formula
    // Verified by exchanging the red and blue weights
    #[test]
    fn test_channel_weights() {
        assert_eq!(Greyscale::luminosity(pack_rgb(255, 0, 0)), 54);
        assert_eq!(Greyscale::luminosity(pack_rgb(0, 255, 0)), 182);
        assert_eq!(Greyscale::luminosity(pack_rgb(0, 0, 255)), 18);
        assert_eq!(Greyscale::luminosity(pack_rgb(255, 255, 255)), 255);
        assert_eq!(Greyscale::luminosity(0), 0);
    }

    // Tests the step rewrites every pixel
    #[test]
    fn test_apply() {
        let mut grid = PixelGrid::from_rows(&[vec![pack_rgb(255, 255, 255), pack_rgb(0, 255, 0)]]);
        Greyscale.apply(&mut grid).expect("greyscale succeeds");
        assert_eq!(grid.intensity(0, 0), 255);
        assert_eq!(grid.intensity(1, 0), 182);
    }
}
