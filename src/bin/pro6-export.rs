//! Command-line front end: entry file in, ProPresenter archive out.
//!
//! ```sh
//! pro6-export schedule.yaml -o exports/ --translation "BasisBibel"
//! ```
//!
//! The entry file is a YAML (or JSON) list:
//!
//! ```yaml
//! - type: event
//!   title: Begrüßung und Votum
//! - type: song
//!   title: Größer
//!   content: |
//!     Vers 1
//!     ---
//!     Refrain
//! - type: scripture
//!   title: Psalm 23
//!   content: "1 Der HERR ist mein Hirte"
//! ```

use clap::{Parser, ValueEnum};
use pro6_export::archive::{ArchiveCompression, DirectoryDelivery};
use pro6_export::config::ExportOptions;
use pro6_export::propresenter::OutputProfile;
use pro6_export::schedule::{is_known_translation, is_ready, load_entries};
use std::path::PathBuf;
use std::process::ExitCode;

/// Build a ProPresenter playlist archive from a service schedule
#[derive(Parser, Debug)]
#[command(name = "pro6-export", version)]
struct Args {
    /// Entry list (YAML or JSON)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Directory the archive is written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Bible translation shown next to scripture titles
    #[arg(short, long, env = "PRO6_TRANSLATION", default_value = pro6_export::schedule::DEFAULT_TRANSLATION)]
    translation: String,

    /// Document schema flavour
    #[arg(long, value_enum, env = "PRO6_PROFILE", default_value = "modern")]
    profile: ProfileArg,

    /// Store archive entries without compression
    #[arg(long)]
    stored: bool,

    /// Render presentations one at a time
    #[arg(long)]
    sequential: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProfileArg {
    /// base64 rich-text payloads
    Modern,
    /// CDATA rich-text payloads
    Legacy,
}

impl From<ProfileArg> for OutputProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Modern => OutputProfile::Modern,
            ProfileArg::Legacy => OutputProfile::Legacy,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("export failed: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let input = std::fs::read_to_string(&args.input)?;
    let entries = load_entries(&input)?;

    if !is_ready(&entries) {
        return Err(format!("{}: no exportable entries", args.input.display()).into());
    }
    if !is_known_translation(&args.translation) {
        log::warn!("translation '{}' is not in the catalogue", args.translation);
    }
    for entry in entries.iter().filter(|e| e.error.is_some()) {
        log::warn!("'{}' will be exported without text", entry.title);
    }

    let options = ExportOptions::new()
        .with_translation(args.translation.clone())
        .with_profile(args.profile.into())
        .with_compression(if args.stored {
            ArchiveCompression::Stored
        } else {
            ArchiveCompression::Deflated
        })
        .with_parallel(!args.sequential);

    let mut delivery = DirectoryDelivery::new(&args.output_dir);
    pro6_export::generate_and_deliver(&entries, &options, &mut delivery)?;

    for path in delivery.delivered() {
        println!("{}", path.display());
    }
    Ok(())
}
