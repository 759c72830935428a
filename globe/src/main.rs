mod configuration;
mod error;
mod export;

use clap::Parser;
use configuration::Format;
use error::Error;
use log::{debug, error, info, warn};
use std::io;
use std::path::PathBuf;

/// Generates a sphere from a subdivided octahedron and writes its vertices to
/// a file. Command line options override the configuration file.
#[derive(Parser, Debug, Default)]
#[command(name = "globe", version)]
struct Args {
    /// Configuration file. Defaults to `configuration.toml` when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subdivision level; every octahedron edge is split into 2^level segments.
    #[arg(short, long)]
    level: Option<u32>,

    /// Seed for the triangle colors.
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Output file. Defaults to `globe.bin` or `globe.obj`.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_configuration(args: &Args) -> Result<configuration::Root, Error> {
    match args.config {
        Some(ref path) => configuration::read(path),
        None => match configuration::read(configuration::FILE_PATH) {
            Err(Error::ReadConfiguration { ref path, ref source }) if source.kind() == io::ErrorKind::NotFound => {
                warn!("Configuration file {:?} not found, using defaults.", path);
                Ok(Default::default())
            }
            result => result,
        },
    }
}

fn apply_overrides(mut cfg: configuration::Root, args: &Args) -> configuration::Root {
    if let Some(level) = args.level {
        cfg.sphere.level = level;
    }
    if let Some(seed) = args.seed {
        cfg.sphere.seed = seed;
    }
    if let Some(format) = args.format {
        cfg.output.format = format;
    }
    if let Some(ref output) = args.output {
        cfg.output.path = Some(output.clone());
    }
    cfg
}

fn check_level(level: u32) -> Result<u32, Error> {
    if level > octasphere::MAX_LEVEL {
        return Err(Error::LevelTooHigh {
            level,
            max: octasphere::MAX_LEVEL,
        });
    }
    Ok(level)
}

fn run(args: Args) -> Result<(), Error> {
    let cfg = apply_overrides(load_configuration(&args)?, &args);
    debug!("{:#?}", cfg);

    let level = check_level(cfg.sphere.level)?;
    let path = cfg.output.path_or_default();

    info!(
        "Generating sphere at level {} ({} triangles) with seed {}.",
        level,
        octasphere::triangle_count(level),
        cfg.sphere.seed
    );
    let vertices = octasphere::generate_sphere_mesh(level, cfg.sphere.seed);

    export::write_file(&path, cfg.output.format, &vertices)?;
    info!("Wrote {} vertices to {:?}.", vertices.len(), path);

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Args::parse()) {
        error!("{}", err);
        std::process::exit(1);
    }
}
