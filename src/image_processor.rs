use std::path::Path;

use image::{imageops, imageops::FilterType, ImageReader, RgbImage};
use ndarray::prelude::*;
use nshare::AsNdarray3;
use tracing::debug;

use crate::errors::{Result, StoneClassifierError};

/// ImageNet channel means in BGR order, as subtracted by ResNet50's "caffe"
/// preprocessing.
pub const BGR_MEAN: [f32; 3] = [103.939, 116.779, 123.68];

/// Decode an image by its content and convert it to 8-bit RGB.
///
/// Grayscale inputs are expanded and alpha is dropped, so every decoded image
/// has exactly three channels.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| StoneClassifierError::FileSystem {
            path: path.to_path_buf(),
            operation: "open image".to_string(),
            source: e,
        })?;

    let image = reader
        .decode()
        .map_err(|e| StoneClassifierError::ImageProcessing {
            path: path.display().to_string(),
            operation: "decode image".to_string(),
            source: Box::new(e),
        })?;

    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "decoded image"
    );

    Ok(image.into_rgb8())
}

/// Build the `(1, size, size, 3)` input tensor for the classifier.
///
/// The image is resized with nearest-neighbour sampling, its channels are
/// reversed to BGR and the ImageNet means are subtracted. Values are not
/// rescaled, so they stay roughly within `[-124, 152]`.
pub fn preprocess(image: &RgbImage, image_size: u32) -> Array4<f32> {
    let image = imageops::resize(image, image_size, image_size, FilterType::Nearest);

    // (C, H, W) -> (1, H, W, C) with C reversed
    let view = image
        .as_ndarray3()
        .slice_move(s![..;-1, .., ..])
        .permuted_axes([1, 2, 0])
        .insert_axis(Axis(0));

    let mut tensor = view.mapv(f32::from);
    for (mut channel, mean) in tensor.axis_iter_mut(Axis(3)).zip(BGR_MEAN) {
        channel -= mean;
    }
    tensor
}
