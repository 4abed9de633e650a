use clap::Parser;
use std::path::PathBuf;

/// Model file looked up in the working directory.
pub const MODEL_FILE: &str = "best_model.onnx";

#[derive(Parser, Clone, Debug)]
#[command(
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Config {
    /// Image to classify. Taken verbatim, even when it starts with `-`.
    #[arg(value_name = "path_to_image", allow_hyphen_values = true)]
    pub image_path: PathBuf,

    #[arg(skip = PathBuf::from(MODEL_FILE))]
    pub model_path: PathBuf,
}

impl Config {
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            model_path: PathBuf::from(MODEL_FILE),
        }
    }

    pub fn with_model_path(mut self, model_path: impl Into<PathBuf>) -> Self {
        self.model_path = model_path.into();
        self
    }
}

/// Single-line usage text printed when the argument count is wrong.
pub fn usage() -> String {
    format!("Usage: {} <path_to_image>", env!("CARGO_PKG_NAME"))
}
