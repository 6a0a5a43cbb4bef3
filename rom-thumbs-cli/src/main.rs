//! rom-thumbs CLI
//!
//! Matches a ROM collection against a libretro-thumbnails catalog and
//! prints one wget command per matched thumbnail. Downloads themselves are
//! left to the shell so a run can be inspected, piped, or resumed freely.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use rom_thumbs_catalog::{CatalogIndex, ThumbnailKind};
use rom_thumbs_lib::{
    DownloadInstruction, Preferences, emit_instructions, resolve_matches, scan_inventory, settings,
};

#[derive(Parser)]
#[command(name = "rom-thumbs")]
#[command(about = "Download box art images for your ROM collection from libretro-thumbnails")]
#[command(after_help = "\
Thumbnail types:
  snapshot      In-game snapshots, aka gameplay screenshots
  boxart        Scans of the boxes or covers of games
  title_screen  Images of the game's introductory title screen

Examples:
  rom-thumbs /path/to/roms
  rom-thumbs /path/to/roms --thumbnail-order boxart
  rom-thumbs /path/to/roms --thumbnail-order title_screen,boxart
  rom-thumbs /path/to/roms --region-priority japan,usa,europe")]
struct Cli {
    /// Path to the ROM collection directory
    rom_path: PathBuf,

    /// Directory containing the per-console catalog CSV files
    #[arg(short, long, default_value = "data/processed/consoles")]
    data_dir: PathBuf,

    /// Priority order for thumbnail types (default: snapshot,boxart,title_screen)
    #[arg(long, value_delimiter = ',')]
    thumbnail_order: Option<Vec<ThumbnailKind>>,

    /// Priority order for regions as they appear in catalog titles
    /// (default: usa,europe,world)
    #[arg(long, value_delimiter = ',')]
    region_priority: Option<Vec<String>>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let prefs = resolve_preferences(cli.thumbnail_order, cli.region_priority);

    log::info!("Loading catalog data...");
    let catalog = match CatalogIndex::load_dir(&cli.data_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "{} Loaded {} catalog records for {} consoles",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        catalog.record_count(),
        catalog.console_count(),
    );

    log::info!("Discovering ROM files...");
    let inventory = match scan_inventory(&cli.rom_path) {
        Ok(inventory) => inventory,
        Err(e) => {
            log::error!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            return ExitCode::FAILURE;
        }
    };

    let matches = resolve_matches(&catalog, &inventory, &prefs);
    let instructions = emit_instructions(&matches);

    if instructions.is_empty() {
        log::info!("No matching images found for ROMs.");
        return ExitCode::SUCCESS;
    }

    log::info!("Found {} images to download:", instructions.len());

    let pb = ProgressBar::new(instructions.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len}").unwrap(),
    );
    for instruction in &instructions {
        println!("{}", wget_command(instruction));
        pb.inc(1);
    }
    pb.finish_and_clear();

    ExitCode::SUCCESS
}

/// Resolve the two preference orders through the priority chain:
/// CLI flag → saved settings → built-in default.
fn resolve_preferences(
    cli_kinds: Option<Vec<ThumbnailKind>>,
    cli_regions: Option<Vec<String>>,
) -> Preferences {
    let saved = settings::load_saved_orders();

    let kinds =
        cli_kinds.unwrap_or_else(|| parse_saved_kinds(saved.thumbnail_order.as_deref()));
    let regions = cli_regions.unwrap_or_else(|| split_saved(saved.region_priority.as_deref()));

    Preferences::new(kinds, regions)
}

/// Parse a saved comma-separated thumbnail order, warning about (and
/// skipping) entries that are not valid kind names.
fn parse_saved_kinds(saved: Option<&str>) -> Vec<ThumbnailKind> {
    let Some(saved) = saved else {
        return Vec::new();
    };
    let mut kinds = Vec::new();
    for name in saved.split(',') {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        match name.parse() {
            Ok(kind) => kinds.push(kind),
            Err(e) => log::warn!("Ignoring saved thumbnail order entry: {e}"),
        }
    }
    kinds
}

fn split_saved(saved: Option<&str>) -> Vec<String> {
    saved
        .map(|s| s.split(',').map(|r| r.trim().to_string()).collect())
        .unwrap_or_default()
}

/// Characters percent-encoded when rendering a URL into the wget command:
/// everything except unreserved characters and the URL reserved set, so
/// spaces and non-ASCII are escaped while URL structure stays intact.
const URL_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Render one download instruction as a shell command. The destination is
/// quoted since ROM names routinely contain spaces and parentheses.
fn wget_command(instruction: &DownloadInstruction) -> String {
    let url = utf8_percent_encode(&instruction.url, URL_ESCAPE);
    format!(
        "wget \"{}\" -O \"{}\"",
        url,
        instruction.destination.display()
    )
}
