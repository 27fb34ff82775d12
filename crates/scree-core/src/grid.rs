//! Row-major 2D scalar grid shared by the sampler, resampler, and builder

/// A 2D grid of `f32` values in row-major order.
///
/// Used for transient steepness maps: values are normalized grayscale
/// intensities in [0..1], but the grid itself does not enforce a range.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    values: Vec<f32>,
    /// Width in cells (columns)
    pub width: u32,
    /// Height in cells (rows)
    pub height: u32,
}

impl Grid {
    /// Create a grid filled with zeros.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            values: vec![0.0; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Create a grid from raw row-major data.
    pub fn from_raw(values: Vec<f32>, width: u32, height: u32) -> Self {
        assert_eq!(values.len(), (width as usize) * (height as usize));
        Self {
            values,
            width,
            height,
        }
    }

    /// Value at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.values[(y * self.width + x) as usize]
    }

    /// Set the value at column `x`, row `y`.
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        self.values[(y * self.width + x) as usize] = value;
    }

    /// The raw row-major values.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Consume the grid, returning the raw row-major values.
    pub fn into_raw(self) -> Vec<f32> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_round_trip() {
        let mut grid = Grid::new(4, 3);
        grid.set(2, 1, 0.75);
        assert_eq!(grid.get(2, 1), 0.75);
        assert_eq!(grid.get(0, 0), 0.0);
    }

    #[test]
    fn from_raw_is_row_major() {
        let grid = Grid::from_raw(vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5], 3, 2);
        assert_eq!(grid.get(2, 0), 0.2);
        assert_eq!(grid.get(0, 1), 0.3);
    }

    #[test]
    #[should_panic]
    fn from_raw_rejects_wrong_length() {
        Grid::from_raw(vec![0.0; 5], 3, 2);
    }
}
