use std::process::ExitCode;

use clap::Parser;

use stone_classifier::{classify_image, config, logging, Config};

fn main() -> ExitCode {
    logging::init();

    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!(error = %e, "argument parsing failed");
            println!("{}", config::usage());
            return ExitCode::FAILURE;
        }
    };

    if !config.model_path.exists() {
        println!(
            "Error: Model file not found at '{}'",
            config.model_path.display()
        );
        return ExitCode::FAILURE;
    }

    if !config.image_path.exists() {
        println!(
            "Error: Image file not found at '{}'",
            config.image_path.display()
        );
        return ExitCode::FAILURE;
    }

    // Pipeline failures are reported on stdout but still exit 0; callers read the line.
    println!("{}", classify_image(&config.model_path, &config.image_path));
    ExitCode::SUCCESS
}
