pub mod config;
pub mod errors;
pub mod image_processor;
pub mod label;
pub mod logging;
pub mod model;
pub mod traits;

pub mod mocks;

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};

pub use config::Config;
pub use errors::{render_chain, Result, StoneClassifierError};
pub use label::{Label, STONE_THRESHOLD};
pub use model::OnnxClassifier;
pub use traits::*;

/// Label plus the raw probability it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: Label,
    pub probability: f32,
}

impl Classification {
    pub fn from_probability(probability: f32) -> Self {
        Self {
            label: Label::from_probability(probability),
            probability,
        }
    }
}

/// Result of one pipeline run, already in the shape printed to stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Classified(Classification),
    Failed(String),
}

impl Outcome {
    pub const fn label(&self) -> Option<Label> {
        match self {
            Self::Classified(classification) => Some(classification.label),
            Self::Failed(_) => None,
        }
    }
}

impl From<Result<Classification>> for Outcome {
    fn from(result: Result<Classification>) -> Self {
        match result {
            Ok(classification) => Self::Classified(classification),
            Err(err) => Self::Failed(render_chain(&err)),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classified(classification) => write!(f, "{}", classification.label),
            Self::Failed(message) => write!(f, "Error: {message}"),
        }
    }
}

/// Runs the preprocess → predict → threshold steps against any classifier.
pub struct StoneClassifier<M: BinaryImageClassifier> {
    model: M,
}

impl<M: BinaryImageClassifier> StoneClassifier<M> {
    pub const fn new(model: M) -> Self {
        Self { model }
    }

    pub fn classify(&self, image_path: &Path) -> Result<Classification> {
        let image = image_processor::load_image(image_path)?;
        let tensor = image_processor::preprocess(&image, self.model.image_size());
        let probability = self.model.predict(tensor.view())?;
        let classification = Classification::from_probability(probability);

        debug!(
            path = %image_path.display(),
            probability,
            label = %classification.label,
            "classified image"
        );
        Ok(classification)
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

impl StoneClassifier<OnnxClassifier> {
    pub fn with_onnx_model(model_path: &Path) -> Result<Self> {
        Ok(Self::new(OnnxClassifier::new(model_path)?))
    }
}

/// Load the model at `model_path` and classify `image_path`, propagating errors.
pub fn try_classify_image(model_path: &Path, image_path: &Path) -> Result<Classification> {
    StoneClassifier::with_onnx_model(model_path)?.classify(image_path)
}

/// Load the model at `model_path` and classify `image_path`.
///
/// Every failure, whether loading, decoding or inference, comes back as
/// [`Outcome::Failed`] instead of an error.
pub fn classify_image(model_path: &Path, image_path: &Path) -> Outcome {
    let outcome = Outcome::from(try_classify_image(model_path, image_path));
    if let Outcome::Failed(message) = &outcome {
        warn!(%message, "classification failed");
    }
    outcome
}
