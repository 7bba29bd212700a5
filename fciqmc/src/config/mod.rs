//! Configuration management for the FCIQMC driver
//!
//! This module handles the YAML configuration, its defaults, and how
//! command-line overrides are merged on top of it.

mod args;

pub use args::Args;

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub plane_wave: Option<PlaneWaveParams>,
    pub walkers: Option<WalkerParams>,
}

/// k-point mesh parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlaneWaveParams {
    pub cutoff: Option<f64>,
}

impl Default for PlaneWaveParams {
    fn default() -> Self {
        PlaneWaveParams { cutoff: Some(2.4) }
    }
}

impl PlaneWaveParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.cutoff.is_none() {
            self.cutoff = defaults.cutoff;
        }
        self
    }
}

/// Walker store parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WalkerParams {
    pub n_walkers: Option<usize>,
    pub n_spin_orbitals: Option<usize>,
}

impl Default for WalkerParams {
    fn default() -> Self {
        WalkerParams {
            n_walkers: Some(1),
            n_spin_orbitals: Some(20),
        }
    }
}

impl WalkerParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.n_walkers.is_none() {
            self.n_walkers = defaults.n_walkers;
        }
        if self.n_spin_orbitals.is_none() {
            self.n_spin_orbitals = defaults.n_spin_orbitals;
        }
        self
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        self.plane_wave = Some(self.plane_wave.take().unwrap_or_default().with_defaults());
        self.walkers = Some(self.walkers.take().unwrap_or_default().with_defaults());
        self
    }

    /// Read a YAML configuration, or fall back to defaults when no path is given
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;
                Self::from_yaml(&content)?
            }
            None => Config::default(),
        };
        Ok(config.with_defaults())
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yml::from_str::<Config>(content).wrap_err("Failed to parse configuration file")
    }

    /// Command-line overrides applied on top of the file values
    pub fn apply_args(mut self, args: &Args) -> Self {
        let plane_wave = self.plane_wave.get_or_insert_with(PlaneWaveParams::default);
        if let Some(cutoff) = args.cutoff {
            plane_wave.cutoff = Some(cutoff);
        }
        let walkers = self.walkers.get_or_insert_with(WalkerParams::default);
        if let Some(n) = args.n_walkers {
            walkers.n_walkers = Some(n);
        }
        if let Some(n) = args.n_spin_orbitals {
            walkers.n_spin_orbitals = Some(n);
        }
        self
    }

    /// Get the kinetic energy cutoff
    pub fn cutoff(&self) -> f64 {
        self.plane_wave
            .as_ref()
            .and_then(|p| p.cutoff)
            .unwrap_or(2.4)
    }

    /// Get the number of walkers
    pub fn n_walkers(&self) -> usize {
        self.walkers.as_ref().and_then(|w| w.n_walkers).unwrap_or(1)
    }

    /// Get the number of spin-orbitals
    pub fn n_spin_orbitals(&self) -> usize {
        self.walkers
            .as_ref()
            .and_then(|w| w.n_spin_orbitals)
            .unwrap_or(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = Config::default().with_defaults();
        assert_eq!(config.cutoff(), 2.4);
        assert_eq!(config.n_walkers(), 1);
        assert_eq!(config.n_spin_orbitals(), 20);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "plane_wave:\n  cutoff: 3.5\nwalkers:\n  n_walkers: 8\n";
        let config = Config::from_yaml(yaml).unwrap().with_defaults();
        assert_eq!(config.cutoff(), 3.5);
        assert_eq!(config.n_walkers(), 8);
        assert_eq!(config.n_spin_orbitals(), 20);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(Config::from_yaml("plane_wave:\n  cutoff: [1, 2]\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::load(Some("/nonexistent/fciqmc.yaml")).is_err());
        assert_eq!(Config::load(None).unwrap().cutoff(), 2.4);
    }

    #[test]
    fn test_args_override_config() {
        let yaml = "plane_wave:\n  cutoff: 3.5\nwalkers:\n  n_walkers: 8\n  n_spin_orbitals: 40\n";
        let args = Args::parse_from(["fciqmc", "--cutoff", "1.5", "--n-spin-orbitals", "64"]);
        let config = Config::from_yaml(yaml)
            .unwrap()
            .with_defaults()
            .apply_args(&args);
        assert_eq!(config.cutoff(), 1.5);
        assert_eq!(config.n_walkers(), 8);
        assert_eq!(config.n_spin_orbitals(), 64);
    }
}
