//! Pixel grids carrying an intensity and an optional gradient direction per pixel
//!
//! Every stage of the solver reads through the [`Raster`] trait so that whole
//! images, single tiles and reassembled boards are interchangeable. Reads outside
//! the grid return an intensity of 0 and no direction; writes outside are ignored.

use ndarray::Array2;

/// Sentinel stored for pixels whose gradient direction is undefined
pub const DIRECTION_UNDEFINED: f64 = f64::NEG_INFINITY;

/// Read access to a rectangular grid of pixels
pub trait Raster {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Intensity at `(x, y)`, 0 when out of range
    fn intensity(&self, x: usize, y: usize) -> i32;

    /// Gradient direction in radians at `(x, y)`, `None` when undefined or out of range
    fn direction(&self, x: usize, y: usize) -> Option<f64>;

    /// Whether `(x, y)` lies inside the grid
    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Intensity at signed coordinates clamped into the grid
    fn clamped_intensity(&self, x: i64, y: i64) -> i32 {
        self.intensity(
            clamp_coordinate(x, self.width()),
            clamp_coordinate(y, self.height()),
        )
    }

    /// Deep copy into an owned grid of the same size
    fn to_grid(&self) -> PixelGrid {
        let mut grid = PixelGrid::new(self.width(), self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                grid.set_intensity(x, y, self.intensity(x, y));
                grid.set_direction(x, y, self.direction(x, y));
            }
        }
        grid
    }
}

/// Write access to a rectangular grid of pixels
pub trait RasterMut: Raster {
    /// Store an intensity, ignored when out of range
    fn set_intensity(&mut self, x: usize, y: usize, value: i32);

    /// Store a direction, `None` marks it undefined; ignored when out of range
    fn set_direction(&mut self, x: usize, y: usize, direction: Option<f64>);
}

/// Clamp a signed coordinate into `0..len`
pub fn clamp_coordinate(value: i64, len: usize) -> usize {
    if value <= 0 || len == 0 {
        0
    } else {
        (value as usize).min(len - 1)
    }
}

/// Pack 8-bit channels into a `0xRRGGBB` intensity
pub const fn pack_rgb(red: u8, green: u8, blue: u8) -> i32 {
    ((red as i32) << 16) | ((green as i32) << 8) | blue as i32
}

/// Split a `0xRRGGBB` intensity into its channels
pub const fn unpack_rgb(value: i32) -> [u8; 3] {
    [
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ]
}

/// Owned pixel grid stored row-major as `[y, x]`
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    intensities: Array2<i32>,
    directions: Array2<f64>,
}

impl PixelGrid {
    /// Create a grid of zero intensities with undefined directions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            intensities: Array2::zeros((height, width)),
            directions: Array2::from_elem((height, width), DIRECTION_UNDEFINED),
        }
    }

    /// Build a grid from rows indexed `rows[y][x]`
    ///
    /// The width is taken from the first row; shorter rows are padded with zeros.
    pub fn from_rows(rows: &[Vec<i32>]) -> Self {
        let width = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                grid.set_intensity(x, y, value);
            }
        }
        grid
    }

    /// Build a grid from columns indexed `columns[x][y]`
    pub fn from_columns(columns: &[Vec<i32>]) -> Self {
        let height = columns.first().map_or(0, Vec::len);
        let mut grid = Self::new(columns.len(), height);
        for (x, column) in columns.iter().enumerate() {
            for (y, &value) in column.iter().enumerate() {
                grid.set_intensity(x, y, value);
            }
        }
        grid
    }

    /// Build a grid from row-major intensities and directions
    pub fn from_parts(rows: &[Vec<i32>], directions: &[Vec<Option<f64>>]) -> Self {
        let mut grid = Self::from_rows(rows);
        for (y, row) in directions.iter().enumerate() {
            for (x, &direction) in row.iter().enumerate() {
                grid.set_direction(x, y, direction);
            }
        }
        grid
    }

    /// Intensities indexed `[y, x]`
    pub const fn intensities(&self) -> &Array2<i32> {
        &self.intensities
    }

    /// Replace all intensities, ignored unless the shape matches
    pub fn replace_intensities(&mut self, intensities: Array2<i32>) {
        if intensities.dim() == self.intensities.dim() {
            self.intensities = intensities;
        }
    }

    /// Number of pixels with a non-zero intensity
    pub fn count_nonzero(&self) -> usize {
        self.intensities.iter().filter(|&&value| value != 0).count()
    }
}

impl Raster for PixelGrid {
    fn width(&self) -> usize {
        self.intensities.ncols()
    }

    fn height(&self) -> usize {
        self.intensities.nrows()
    }

    fn intensity(&self, x: usize, y: usize) -> i32 {
        self.intensities.get((y, x)).copied().unwrap_or(0)
    }

    fn direction(&self, x: usize, y: usize) -> Option<f64> {
        self.directions
            .get((y, x))
            .copied()
            .filter(|direction| direction.is_finite())
    }

    fn to_grid(&self) -> PixelGrid {
        self.clone()
    }
}

impl RasterMut for PixelGrid {
    fn set_intensity(&mut self, x: usize, y: usize, value: i32) {
        if let Some(cell) = self.intensities.get_mut((y, x)) {
            *cell = value;
        }
    }

    fn set_direction(&mut self, x: usize, y: usize, direction: Option<f64>) {
        if let Some(cell) = self.directions.get_mut((y, x)) {
            *cell = direction.unwrap_or(DIRECTION_UNDEFINED);
        }
    }
}
