use clap::Parser;
use std::path::PathBuf;

use crate::icons::{IconRequest, IconSet};

#[derive(Parser, Debug)]
#[command(name = "iconzip")]
#[command(version)]
#[command(about = "Extract and recolor SVG icons from icon-font archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  iconzip fontawesome-free-6.5.1-desktop.zip github --fill '#691E7C'\n  \
  iconzip -k feather feather.zip arrow-up-circle -d icons/\n  \
  iconzip -k phosphor phosphor-icons.zip sword --flat -s bold\n  \
  iconzip -f git fontawesome-free-6.5.1-desktop.zip   search icon names")]
pub struct Cli {
    /// Icon archive: zip file or extracted directory
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Icons to load
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,

    /// Layout of the icon archive
    #[arg(short = 'k', long = "kind", value_enum, default_value_t = IconSet::FontAwesome)]
    pub kind: IconSet,

    /// Icon style (e.g. solid, brands, regular, bold)
    #[arg(short = 's', long)]
    pub style: Option<String>,

    /// Use Phosphor's flat variant
    #[arg(long)]
    pub flat: bool,

    /// Color for the root fill attribute
    #[arg(long, value_name = "COLOR")]
    pub fill: Option<String>,

    /// Color for the root stroke attribute
    #[arg(long, value_name = "COLOR")]
    pub stroke: Option<String>,

    /// List icon files in the archive
    #[arg(short = 'l')]
    pub list: bool,

    /// Search icon names
    #[arg(short = 'f', long = "find", value_name = "TERM")]
    pub search: Option<String>,

    /// Write <DIR>/<name>.svg instead of printing to stdout
    #[arg(short = 'd', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Never overwrite existing files
    #[arg(short = 'n')]
    pub never_overwrite: bool,

    /// Overwrite files WITHOUT prompting
    #[arg(short = 'o')]
    pub overwrite: bool,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// More log output (-vv => trace)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0 || self.output_dir.is_none()
    }

    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        match (self.is_very_quiet(), self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }

    pub fn request(&self, name: &str) -> IconRequest {
        IconRequest {
            name: name.to_string(),
            style: self.style.clone(),
            flat: self.flat,
            fill: self.fill.clone(),
            stroke: self.stroke.clone(),
        }
    }
}
