use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_CONFIG_PATH, DEFAULT_IMAGES_DIR, DEFAULT_STATIC_DIR,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-mono",
    about = "Black-and-white threshold conversion and JPEG recompression",
    long_about = "img-mono converts images to strict black and white using a fixed threshold \
                  read from a one-line config file, re-encodes them as JPEG at a chosen quality, \
                  or does both. It runs as an interactive prompt, a one-shot command, or a small \
                  web form.",
    version,
    after_help = "EXAMPLES:\n  \
    img-mono interactive --images-dir ./images\n  \
    img-mono process scan.tif scan_bw.png --mode 2\n  \
    img-mono process photo.png photo.jpg --mode 3 -Q 60\n  \
    img-mono serve --bind 0.0.0.0:5000"
)]
pub struct Args {
    #[arg(short, long, global = true, help = "Show debug logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, conflicts_with = "verbose", help = "Only log errors")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Prompt for the image, output name, mode and quality",
        long_about = "Prompt for an image name and an output name (both resolved inside the images \
                      directory), then for the mode (1: compress, 2: black and white, 3: both) and, \
                      for modes 1 and 3, the JPEG quality. Exits with status 1 if the image or the \
                      threshold config file is missing, or the mode is not 1, 2 or 3."
    )]
    Interactive {
        #[arg(
            short = 'd',
            long,
            default_value = DEFAULT_IMAGES_DIR,
            help = "Directory holding source and processed images"
        )]
        images_dir: PathBuf,

        #[arg(
            short = 'c',
            long,
            default_value = DEFAULT_CONFIG_PATH,
            help = "Threshold config file (single integer 0-255)"
        )]
        config: PathBuf,
    },

    #[command(
        about = "Process a single image without prompting",
        long_about = "Run one mode on one image. Mode 1 recompresses as JPEG, mode 2 converts to \
                      black and white in the format of the output extension, mode 3 does both."
    )]
    Process {
        #[arg(help = "Input image file path")]
        input: PathBuf,

        #[arg(help = "Output image file path")]
        output: PathBuf,

        #[arg(short = 'm', long, help = "Mode: 1 compress, 2 black and white, 3 both")]
        mode: String,

        #[arg(
            short = 'Q',
            long,
            help = "JPEG quality for modes 1 and 3 (1-100, default: 90)",
            long_help = "JPEG quality from 1 (smallest) to 100 (best). \
                         Values outside 1-100 or non-numeric input fall back to 90."
        )]
        quality: Option<String>,

        #[arg(
            short = 'c',
            long,
            default_value = DEFAULT_CONFIG_PATH,
            help = "Threshold config file (single integer 0-255)"
        )]
        config: PathBuf,
    },

    #[command(
        about = "Serve the upload form over HTTP",
        long_about = "Serve the upload form. Uploads are stored in <static-dir>/uploads and results \
                      in <static-dir>/processed. The threshold file is re-read on every request."
    )]
    Serve {
        #[arg(short = 'b', long, default_value = DEFAULT_BIND_ADDR, help = "Address to listen on")]
        bind: String,

        #[arg(
            short = 's',
            long,
            default_value = DEFAULT_STATIC_DIR,
            help = "Directory for uploads and processed images"
        )]
        static_dir: PathBuf,

        #[arg(
            short = 'c',
            long,
            default_value = DEFAULT_CONFIG_PATH,
            help = "Threshold config file (single integer 0-255)"
        )]
        config: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_process() {
        let args = Args::try_parse_from([
            "img-mono", "process", "in.png", "out.jpg", "--mode", "3", "-Q", "70",
        ])
        .unwrap();
        match args.command {
            Commands::Process {
                input,
                output,
                mode,
                quality,
                config,
            } => {
                assert_eq!(input, PathBuf::from("in.png"));
                assert_eq!(output, PathBuf::from("out.jpg"));
                assert_eq!(mode, "3");
                assert_eq!(quality.as_deref(), Some("70"));
                assert_eq!(config, PathBuf::from("value.ini"));
            }
            _ => panic!("expected process"),
        }
    }

    #[test]
    fn test_parse_interactive_defaults() {
        let args = Args::try_parse_from(["img-mono", "interactive"]).unwrap();
        assert!(!args.verbose);
        match args.command {
            Commands::Interactive { images_dir, config } => {
                assert_eq!(images_dir, PathBuf::from("images"));
                assert_eq!(config, PathBuf::from("value.ini"));
            }
            _ => panic!("expected interactive"),
        }
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["img-mono", "-v", "-q", "interactive"]).is_err());
    }
}
