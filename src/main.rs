use anyhow::Result;
use clap::Parser;
use img_mono::cli::{Args, Commands};
use img_mono::config::{read_threshold_value, resolve_quality};
use img_mono::constants::{ERROR_PREFIX, SUCCESS_PREFIX, WARNING_PREFIX};
use img_mono::interactive::{run_interactive, InteractiveOptions};
use img_mono::pipeline::{run_pipeline, ModeChoice};
use img_mono::utils::{create_progress_spinner, print_report};
use img_mono::web::{start_server, ServerConfig};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(&args);

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", ERROR_PREFIX, e);
        std::process::exit(1);
    }
}

fn init_tracing(args: &Args) {
    let default_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else if matches!(args.command, Commands::Serve { .. }) {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "img_mono={default_level},tower_http={default_level}"
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Interactive { images_dir, config } => {
            let options = InteractiveOptions {
                images_dir,
                config_path: config,
            };
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut out = std::io::stdout();
            run_interactive(&mut input, &mut out, &options)?;
        }
        Commands::Process {
            input,
            output,
            mode,
            quality,
            config,
        } => {
            process_one(&input, &output, &mode, quality.as_deref(), &config)?;
        }
        Commands::Serve {
            bind,
            static_dir,
            config,
        } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(start_server(ServerConfig {
                bind,
                static_dir,
                config_path: config,
            }))?;
        }
    }

    Ok(())
}

fn process_one(
    input: &Path,
    output: &Path,
    mode: &str,
    quality: Option<&str>,
    config: &Path,
) -> Result<()> {
    let choice: ModeChoice = mode.parse()?;
    println!("🖼️  Processing image: {:?} ({})", input, choice);
    println!("📁 Output: {:?}", output);

    let threshold = if choice.needs_threshold() {
        Some(read_threshold_value(config)?)
    } else {
        None
    };
    let quality = if choice.needs_quality() {
        let (quality, fallback) = resolve_quality(quality);
        if let Some(fallback) = fallback {
            println!("{}  {}", WARNING_PREFIX, fallback);
        }
        Some(quality)
    } else {
        None
    };
    let mode = choice.with_params(threshold, quality)?;

    let pb = create_progress_spinner("Processing image...");
    let result = run_pipeline(input, output, &mode);
    pb.finish_and_clear();
    let report = result?;

    print_report(&report);
    println!("{} Saved {:?}", SUCCESS_PREFIX, report.output);
    Ok(())
}
