use log::{info, warn};
use sobel_pgm::{load_options, parse_threshold_arg, PipelineOptions, SobelPipeline};
use std::env;
use std::ffi::OsString;
use std::path::Path;

/// Environment variable naming an optional JSON options file.
const CONFIG_ENV: &str = "SOBEL_CONFIG";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Paths need not be UTF-8, so arguments stay as `OsString`.
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    if args.len() < 2 {
        eprintln!("{}", usage());
        std::process::exit(2);
    }
    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &[OsString]) -> sobel_pgm::Result<()> {
    let mut options = match env::var_os(CONFIG_ENV) {
        Some(path) => {
            info!("loading options from {}", Path::new(&path).display());
            load_options(Path::new(&path))?
        }
        None => PipelineOptions::default(),
    };
    if let Some(arg) = args.get(2) {
        options.threshold = Some(parse_threshold_arg(arg, options.threshold_parsing)?);
    }
    if args.len() > 3 {
        warn!("ignoring {} extra argument(s)", args.len() - 3);
    }

    let pipeline = SobelPipeline::new(options);
    pipeline.run_files(Path::new(&args[0]), Path::new(&args[1]))?;
    Ok(())
}

fn usage() -> String {
    "Usage: sobel <input.pgm> <output.pgm> [threshold]\n\
     \n  threshold  float in [0, 1], or one of: low, high\
     \n  SOBEL_CONFIG=<options.json> loads run options from a file"
        .to_string()
}
