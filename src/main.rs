//! Main entry point for the iconzip CLI application.
//!
//! Loads icons from an icon-font archive (zip or directory) and writes the
//! recolored SVG to stdout or to files.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use iconzip::{Cli, IconLoader};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let loader = IconLoader::new();

    // List mode: display archive contents and exit
    if cli.list {
        for path in loader
            .list(&cli.archive)
            .with_context(|| format!("listing {}", cli.archive.display()))?
        {
            println!("{path}");
        }
        return Ok(());
    }

    // Search mode: display matching icon names and exit
    if let Some(term) = &cli.search {
        for name in loader
            .search(cli.kind, &cli.archive, term)
            .with_context(|| format!("searching {}", cli.archive.display()))?
        {
            println!("{name}");
        }
        return Ok(());
    }

    if cli.names.is_empty() {
        bail!("no icon names given (use -l to list icons or -f to search)");
    }

    let show_name = cli.output_dir.is_none() && cli.names.len() > 1;
    for name in &cli.names {
        let svg = loader
            .load(cli.kind, &cli.archive, &cli.request(name))
            .with_context(|| format!("loading {name} from {}", cli.archive.display()))?;
        write_icon(&cli, name, &svg, show_name)?;
    }

    Ok(())
}

/// Write one icon to stdout or to `<DIR>/<name>.svg`.
///
/// Existing files are skipped unless `-o` is given, and always skipped
/// with `-n`.
fn write_icon(cli: &Cli, name: &str, svg: &[u8], show_name: bool) -> Result<()> {
    let Some(dir) = &cli.output_dir else {
        let mut stdout = std::io::stdout().lock();
        if show_name {
            writeln!(stdout, "--- {name} ---")?;
        }
        stdout.write_all(svg)?;
        writeln!(stdout)?;
        return Ok(());
    };

    let output_path = dir.join(format!("{}.svg", file_stem(name)));

    if output_path.exists() {
        if cli.never_overwrite {
            if !cli.is_quiet() {
                eprintln!("Skipping: {} (file exists)", output_path.display());
            }
            return Ok(());
        }

        if !cli.overwrite {
            if !cli.is_quiet() {
                eprintln!("Skipping: {} (use -o to overwrite)", output_path.display());
            }
            return Ok(());
        }
    }

    if !cli.is_quiet() {
        println!("  writing: {}", output_path.display());
    }

    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    fs::write(&output_path, svg).with_context(|| format!("writing {}", output_path.display()))?;

    Ok(())
}

/// Icon names are used as file names; keep only the last path segment.
fn file_stem(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}
