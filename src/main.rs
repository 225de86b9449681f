//! StepPlay CLI Entry Point
//!
//! Plays back an algorithm's execution trace in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Play back a scan over the input array
//! stepplay input.json
//!
//! # Faster playback
//! stepplay input.json --speed 100
//!
//! # Manual single-stepping (no timer)
//! stepplay input.json --step
//!
//! # Select an algorithm by name
//! stepplay input.json --algorithm scan
//! ```

use std::env;
use std::process::ExitCode;
use std::time::Duration;

use log::{debug, info};

use stepplay::algorithm::{load_input, Algorithm, LinearScan};
use stepplay::playback::{PlaybackEngine, PlaybackStatus};
use stepplay::render::TerminalRenderer;
use stepplay::{APP_NAME, VERSION};

/// Default algorithm used when none is specified.
const DEFAULT_ALGORITHM: &str = "scan";

/// Default delay between steps in milliseconds.
const DEFAULT_SPEED_MS: u64 = 500;

/// Command-line configuration parsed from arguments.
#[derive(Debug)]
struct Config {
    input_path: String,
    algorithm: String,
    speed_ms: u64,
    step_mode: bool,
    no_color: bool,
    verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: String::new(),
            algorithm: DEFAULT_ALGORITHM.to_string(),
            speed_ms: DEFAULT_SPEED_MS,
            step_mode: false,
            no_color: false,
            verbose: false,
        }
    }
}

/// Configures the logging system with appropriate formatting.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            use std::io::Write;

            match record.level() {
                log::Level::Warn | log::Level::Error => {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

/// Prints the application banner with version information.
fn print_banner() {
    println!();
    println!("{} v{}", APP_NAME, VERSION);
    println!("Step-Playback Engine for Algorithm Visualization");
    println!();
}

/// Prints usage information.
fn print_usage() {
    println!("Usage: stepplay [OPTIONS] <INPUT_FILE>");
    println!();
    println!("Arguments:");
    println!("  <INPUT_FILE>        Path to JSON input data");
    println!();
    println!("Options:");
    println!("  --algorithm NAME    Algorithm to play back (default: {})", DEFAULT_ALGORITHM);
    println!("  --speed MS          Delay between steps in ms (default: {})", DEFAULT_SPEED_MS);
    println!("  --step              Single-step through the trace without a timer");
    println!("  --no-color          Disable colored output");
    println!("  --verbose           Enable debug logging");
    println!("  --help              Show this help message");
    println!("  --version           Show version information");
    println!();
    println!("Examples:");
    println!("  stepplay numbers.json");
    println!("  stepplay numbers.json --speed 100");
    println!("  stepplay numbers.json --algorithm scan --step");
}

/// Parses command-line arguments into a Config struct.
fn parse_arguments(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();
    let mut positional_index = 0;
    let mut i = 1; // Skip program name

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("{} {}", APP_NAME, VERSION);
                std::process::exit(0);
            }
            "--step" => {
                config.step_mode = true;
            }
            "--no-color" => {
                config.no_color = true;
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--algorithm" => {
                i += 1;
                if i >= args.len() {
                    return Err("--algorithm requires a name argument".to_string());
                }
                config.algorithm = args[i].clone();
            }
            "--speed" => {
                i += 1;
                if i >= args.len() {
                    return Err("--speed requires a millisecond argument".to_string());
                }
                config.speed_ms = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid speed value: {}", args[i]))?;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => {
                // Positional argument
                match positional_index {
                    0 => config.input_path = arg.clone(),
                    _ => return Err(format!("Unexpected argument: {}", arg)),
                }
                positional_index += 1;
            }
        }
        i += 1;
    }

    if config.input_path.is_empty() {
        return Err("Missing required <INPUT_FILE> argument".to_string());
    }

    Ok(config)
}

/// Builds the named algorithm.
fn select_algorithm(name: &str) -> Result<Box<dyn Algorithm>, String> {
    match name {
        "scan" => Ok(Box::new(LinearScan::new())),
        other => Err(format!(
            "Unknown algorithm: '{}' (available: {})",
            other, DEFAULT_ALGORITHM
        )),
    }
}

/// Main application entry point.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let config = parse_arguments(&args).map_err(|e| {
        eprintln!("Error: {}", e);
        eprintln!();
        print_usage();
        e
    })?;

    // Setup logging
    setup_logging(config.verbose);

    // Print banner
    print_banner();

    // Load input data
    info!("Loading input: {}", config.input_path);
    let input = load_input(&config.input_path)?;

    // Construct and initialize the algorithm
    let mut algorithm = select_algorithm(&config.algorithm)?;
    algorithm.init(input);
    info!("Algorithm: {}", algorithm.name());

    // Create the renderer and engine
    let mut renderer = TerminalRenderer::new();
    renderer.set_use_color(!config.no_color);

    let mut engine = PlaybackEngine::new(Box::new(renderer));
    engine.set_speed(Duration::from_millis(config.speed_ms));
    engine.set_on_update(|update| {
        debug!("Status: {} (step {:?})", update.status, update.step);
    });

    engine.load_algorithm(algorithm);

    // Drive playback
    if config.step_mode {
        while engine.status() != PlaybackStatus::Finished {
            engine.step_forward();
        }
    } else {
        engine.run();
    }

    // Report
    println!();
    println!("{}", engine.timeline().summary());

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
