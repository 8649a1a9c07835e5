pub mod cli;
pub mod compress;
pub mod config;
pub mod constants;
pub mod error;
pub mod interactive;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod threshold;
pub mod utils;
pub mod validation;
pub mod web;

pub use compress::compress_image;
pub use config::{read_threshold_value, resolve_quality};
pub use error::{ProcessingError, Result};
pub use interactive::{run_interactive, InteractiveOptions};
pub use loader::{load_image, validate_file_exists};
pub use pipeline::{run_pipeline, ModeChoice, ProcessMode, ProcessReport};
pub use threshold::{convert_to_black_and_white, threshold_image};
