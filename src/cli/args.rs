//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;

use crate::config::{Endpoints, RunMode, DEFAULT_API_BASE, DEFAULT_RAW_BASE};

const LONG_ABOUT: &str = "getignore is a CLI client to GitHub's .gitignore templates.
List and print .gitignore templates for a wide variety of
languages from the terminal.";

/// getignore - print gitignore templates for a language.
#[derive(Debug, Parser)]
#[command(name = "getignore")]
#[command(version, about, long_about = LONG_ABOUT)]
#[command(after_help = "Examples:\n  getignore python go visualstudiocode >> .gitignore")]
pub struct Cli {
    /// Templates to print (e.g. go, python, visualstudiocode)
    #[arg(value_name = "LANGUAGE")]
    pub languages: Vec<String>,

    /// List available gitignore templates
    #[arg(short, long)]
    pub list: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Base URL of the tree API
    #[arg(long, env = "GETIGNORE_API_URL", default_value = DEFAULT_API_BASE, hide = true)]
    pub api_url: String,

    /// Base URL of the raw-content endpoint
    #[arg(long, env = "GETIGNORE_RAW_URL", default_value = DEFAULT_RAW_BASE, hide = true)]
    pub raw_url: String,
}

impl Cli {
    /// Endpoints selected by the base-URL overrides.
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.api_url.clone(), self.raw_url.clone())
    }

    /// Run mode, or `None` when neither names nor `--list` were given.
    pub fn mode(&self) -> Option<RunMode> {
        RunMode::from_args(self.list, &self.languages)
    }
}
