use std::path::Path;

use crate::{
    errors::{Result, StoneClassifierError},
    traits::{BinaryImageClassifier, IMAGE_SIZE},
};
use ndarray::prelude::*;
use ort::{
    session::{builder::GraphOptimizationLevel, Session},
    value::TensorRef,
};
use parking_lot::Mutex;
use tracing::{debug, info};

/// Binary classifier backed by an ONNX Runtime session.
///
/// The graph must take one NHWC `f32` input of shape `(N, 224, 224, 3)` and
/// produce one sigmoid output per sample.
pub struct OnnxClassifier {
    input_name: String,
    output_name: String,
    session: Mutex<Session>,
}

impl OnnxClassifier {
    pub fn new(model_path: &Path) -> Result<Self> {
        let session = Session::builder()
            .map_err(|e| StoneClassifierError::model("create session builder", e.to_string()))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| StoneClassifierError::model("set optimization level", e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| {
                StoneClassifierError::model(
                    format!("load model from {}", model_path.display()),
                    e.to_string(),
                )
            })?;

        let input = session.inputs.first().ok_or_else(|| missing_tensor("input"))?;
        let output = session
            .outputs
            .first()
            .ok_or_else(|| missing_tensor("output"))?;

        let shape = input
            .input_type
            .tensor_shape()
            .ok_or_else(|| StoneClassifierError::Validation {
                field: format!("model input `{}`", input.name),
                reason: "is not a tensor".to_string(),
            })?;
        check_input_shape(&input.name, &shape.iter().copied().collect::<Vec<i64>>())?;

        info!(
            path = %model_path.display(),
            input = %input.name,
            output = %output.name,
            "loaded model"
        );

        Ok(Self {
            input_name: input.name.clone(),
            output_name: output.name.clone(),
            session: Mutex::new(session),
        })
    }
}

impl BinaryImageClassifier for OnnxClassifier {
    fn predict(&self, tensor: ArrayView4<f32>) -> Result<f32> {
        let mut session = self.session.lock();
        let outputs = session.run(ort::inputs![
            self.input_name.as_str() => TensorRef::from_array_view(&tensor.as_standard_layout())?
        ])?;
        let output = outputs[self.output_name.as_str()].try_extract_array::<f32>()?;
        debug!(shape = ?output.shape(), "inference finished");

        single_value(output.iter().copied())
    }
}

fn missing_tensor(kind: &str) -> StoneClassifierError {
    StoneClassifierError::Validation {
        field: format!("model {kind}"),
        reason: "is not declared by the graph".to_string(),
    }
}

/// Accept `(N, H, W, C)` inputs whose static dimensions match the
/// preprocessed tensor. Dynamic dimensions (`-1`) are left to the runtime.
fn check_input_shape(name: &str, dims: &[i64]) -> Result<()> {
    let expected = [1, i64::from(IMAGE_SIZE), i64::from(IMAGE_SIZE), 3];
    let matches = dims.len() == expected.len()
        && dims
            .iter()
            .zip(expected)
            .all(|(&dim, want)| dim <= 0 || dim == want);

    if matches {
        Ok(())
    } else {
        Err(StoneClassifierError::Validation {
            field: format!("model input `{name}`"),
            reason: format!("has shape {dims:?}, expected {expected:?} (NHWC)"),
        })
    }
}

/// Pull the one probability out of a `1x1` output.
fn single_value(mut values: impl Iterator<Item = f32>) -> Result<f32> {
    match (values.next(), values.next()) {
        (Some(value), None) => Ok(value),
        (None, _) => Err(StoneClassifierError::Validation {
            field: "model output".to_string(),
            reason: "is empty".to_string(),
        }),
        (Some(_), Some(_)) => Err(StoneClassifierError::Validation {
            field: "model output".to_string(),
            reason: format!("has {} values, expected 1", values.count() + 2),
        }),
    }
}
