//! FCIQMC Command-Line Interface
//!
//! Builds the plane-wave basis and the walker determinant store from a YAML
//! configuration and command-line overrides.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use fciqmc_basis::{PlaneWave, Walkers};
use tracing::info;

mod config;
mod io;

use config::{Args, Config};
use io::{dump_mesh, print_mesh, setup_output};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    setup_output(args.output.as_deref());

    match &args.config_file {
        Some(path) => info!("Reading configuration from: {}", path),
        None => info!("No configuration file given, using defaults"),
    }
    let config = Config::load(args.config_file.as_deref())?.apply_args(&args);
    info!("Configuration loaded:\n{:?}", config);

    let plane_wave = build_plane_wave(&config)?;
    let walkers = build_walkers(&config)?;

    info!("===========================================");
    info!("        Basis Summary");
    info!("===========================================");
    info!("Kinetic energy cutoff: {}", plane_wave.cutoff());
    info!("Number of k-points: {}", plane_wave.len());
    if let Some(max) = plane_wave.max_kinetic() {
        info!("Highest kinetic energy: {:.6}", max);
    }
    info!("Number of walkers: {}", walkers.walker_count());
    info!("Number of spin-orbitals: {}", walkers.n_spin_orbitals());
    info!(
        "Occupation lookup tables: {}",
        walkers.occupation_tables().len()
    );
    info!("===========================================");

    if args.print_mesh {
        let stdout = std::io::stdout();
        print_mesh(&mut stdout.lock(), &plane_wave)?;
    }
    if let Some(path) = &args.dump_mesh {
        dump_mesh(path, &plane_wave)?;
    }

    Ok(())
}

fn build_plane_wave(config: &Config) -> Result<PlaneWave> {
    let cutoff = config.cutoff();
    PlaneWave::new(cutoff)
        .wrap_err_with(|| format!("Failed to build k-point mesh with cutoff {}", cutoff))
}

fn build_walkers(config: &Config) -> Result<Walkers> {
    Walkers::new(config.n_walkers(), config.n_spin_orbitals())
        .wrap_err("Failed to create walkers")
}
