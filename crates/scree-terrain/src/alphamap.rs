//! Blend weight (alphamap) storage

/// A 3D array of texture blend weights, indexed `[row][col][layer]`.
///
/// Weights are in [0..1]. After a paint operation every touched cell is
/// one-hot: exactly one layer carries weight 1.0 and all others 0.0.
#[derive(Clone, Debug, PartialEq)]
pub struct BlendWeights {
    weights: Vec<f32>,
    /// Number of columns
    pub width: u32,
    /// Number of rows
    pub height: u32,
    /// Number of texture layers
    pub layers: u32,
}

impl BlendWeights {
    /// Create a zeroed weight array of the given shape.
    pub fn new(width: u32, height: u32, layers: u32) -> Self {
        let len = (width as usize) * (height as usize) * (layers as usize);
        Self {
            weights: vec![0.0; len],
            width,
            height,
            layers,
        }
    }

    /// Weight of `layer` at (`row`, `col`).
    pub fn get(&self, row: u32, col: u32, layer: u32) -> f32 {
        self.weights[self.index(row, col, layer)]
    }

    /// Set the weight of `layer` at (`row`, `col`).
    pub fn set(&mut self, row: u32, col: u32, layer: u32, weight: f32) {
        let idx = self.index(row, col, layer);
        self.weights[idx] = weight;
    }

    /// Assign full weight to `layer` at (`row`, `col`) and zero the rest.
    pub fn set_one_hot(&mut self, row: u32, col: u32, layer: u32) {
        let base = self.index(row, col, 0);
        for l in 0..self.layers as usize {
            self.weights[base + l] = 0.0;
        }
        self.weights[base + layer as usize] = 1.0;
    }

    /// True if exactly one layer at (`row`, `col`) has weight 1.0 and all
    /// others are 0.0.
    pub fn is_one_hot(&self, row: u32, col: u32) -> bool {
        let mut ones = 0;
        for layer in 0..self.layers {
            let w = self.get(row, col, layer);
            if w == 1.0 {
                ones += 1;
            } else if w != 0.0 {
                return false;
            }
        }
        ones == 1
    }

    /// The raw weights, row-major with layers innermost.
    pub fn as_slice(&self) -> &[f32] {
        &self.weights
    }

    fn index(&self, row: u32, col: u32, layer: u32) -> usize {
        ((row * self.width + col) * self.layers + layer) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hot_assignment_clears_other_layers() {
        let mut weights = BlendWeights::new(2, 2, 3);
        weights.set(1, 0, 2, 0.4);
        weights.set_one_hot(1, 0, 0);

        assert_eq!(weights.get(1, 0, 0), 1.0);
        assert_eq!(weights.get(1, 0, 1), 0.0);
        assert_eq!(weights.get(1, 0, 2), 0.0);
        assert!(weights.is_one_hot(1, 0));
    }

    #[test]
    fn fresh_cells_are_not_one_hot() {
        let weights = BlendWeights::new(2, 2, 3);
        assert!(!weights.is_one_hot(0, 0));
    }

    #[test]
    fn partial_weights_are_not_one_hot() {
        let mut weights = BlendWeights::new(1, 1, 2);
        weights.set(0, 0, 0, 0.5);
        weights.set(0, 0, 1, 0.5);
        assert!(!weights.is_one_hot(0, 0));
    }
}
