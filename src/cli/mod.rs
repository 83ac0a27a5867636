use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::DependencyKind;
use crate::{parser, regions, unifier, writer};

#[derive(Parser, Debug)]
#[command(name = "depunify")]
#[command(version, about = "Unify duplicate dependency declarations in schema files", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Write through a temp file and rename instead of truncating in place
    #[arg(long, global = true)]
    pub atomic: bool,

    /// Print the rewritten file to stdout without modifying it
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (suppress output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Unify functional dependency lines (`table cols -> cols`)
    Fds {
        /// Schema file to rewrite in place
        file: PathBuf,
    },

    /// Unify inclusion dependency lines (`Left(cols) <= Right(cols)`)
    Inds {
        /// Schema file to rewrite in place
        file: PathBuf,
    },
}

pub fn run(args: Args) -> Result<()> {
    match &args.command {
        Commands::Fds { file } => unify_file(file, DependencyKind::Functional, &args),
        Commands::Inds { file } => unify_file(file, DependencyKind::Inclusion, &args),
    }
}

fn unify_file(path: &Path, kind: DependencyKind, args: &Args) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file {}", path.display()))?;

    let regions = regions::split(&content, kind)?;
    let body_lines = regions.body.len();

    let unified: Vec<String> = match kind {
        DependencyKind::Functional => {
            let fds = regions
                .body
                .iter()
                .map(|line| parser::parse_fd(line))
                .collect::<Result<Vec<_>, _>>()?;
            unifier::unify_fds(fds)
                .iter()
                .map(ToString::to_string)
                .collect()
        }
        DependencyKind::Inclusion => {
            let inds = regions
                .body
                .iter()
                .map(|line| parser::parse_ind(line))
                .collect::<Result<Vec<_>, _>>()?;
            unifier::unify_inds(inds)
                .iter()
                .map(ToString::to_string)
                .collect()
        }
    };

    info!(
        "Unified {} dependency line(s) into {}",
        body_lines,
        unified.len()
    );

    let output = writer::assemble(&regions, &unified);

    if args.dry_run {
        print!("{}", output);
        return Ok(());
    }

    if args.atomic {
        writer::write_atomic(path, &output)?;
    } else {
        writer::write_in_place(path, &output)?;
    }

    if !args.quiet {
        println!(
            "✓ {} dependency line(s) -> {} in {}",
            body_lines,
            unified.len(),
            path.display()
        );
    }

    Ok(())
}
