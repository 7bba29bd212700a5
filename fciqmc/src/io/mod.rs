//! Input/Output operations for the FCIQMC driver
//!
//! This module handles logging setup and mesh output.

mod output;

pub use output::{dump_mesh, print_mesh, setup_output};
