//! Command-line argument parsing for the FCIQMC driver

use clap::Parser;

/// Build a plane-wave basis and walker determinant store
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a YAML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Override kinetic energy cutoff of the k-point mesh
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Override number of walkers
    #[arg(long)]
    pub n_walkers: Option<usize>,

    /// Override number of spin-orbitals per determinant
    #[arg(long)]
    pub n_spin_orbitals: Option<usize>,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print every k-point of the mesh with its kinetic energy
    #[arg(long)]
    pub print_mesh: bool,

    /// Write the mesh as JSON to this path
    #[arg(long)]
    pub dump_mesh: Option<String>,
}
