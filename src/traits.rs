use crate::errors::Result;
use ndarray::prelude::*;

/// Side length of the square input every classifier in this crate consumes.
pub const IMAGE_SIZE: u32 = 224;

/// A model that maps one preprocessed image to a single probability.
///
/// The pipeline depends on this trait rather than on the ONNX session, so the
/// threshold and error paths can be exercised with a fixed-probability mock.
pub trait BinaryImageClassifier {
    /// Side length of the square input the model expects.
    fn image_size(&self) -> u32 {
        IMAGE_SIZE
    }

    /// Run one forward pass over a `(1, size, size, 3)` NHWC tensor and return
    /// the single output probability.
    fn predict(&self, tensor: ArrayView4<f32>) -> Result<f32>;
}
