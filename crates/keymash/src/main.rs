//! Binary entrypoint for the keymash toy.

use std::{path::PathBuf, process};

use clap::{Parser, Subcommand};
use config::{Settings, ThemeRegistry};
use media::{Blacklist, Blacklists, Catalog, MediaKind};
use respond::{ModeFlags, RandomSource, Responder};
use tracing::{info, warn};

mod session;

#[derive(Parser, Debug)]
#[command(name = "keymash", about = "A keyboard-masher toy for small children", version)]
/// Command-line interface for the `keymash` binary.
struct Cli {
    /// Optional subcommand.
    #[command(subcommand)]
    command: Option<Command>,

    /// Logging controls
    #[command(flatten)]
    log: logging::LogArgs,

    /// Optional path to the settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding the bundled sounds and images
    #[arg(long, value_name = "DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Extension collection to load
    #[arg(long, value_name = "NAME")]
    extension: Option<String>,

    /// Seed the random source for a reproducible run
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Render glyphs upper-cased
    #[arg(long)]
    uppercase: bool,

    /// Same key always plays the same sound
    #[arg(long)]
    deterministic_sounds: bool,

    /// Glob pattern for sound files to exclude (repeatable)
    #[arg(long, value_name = "GLOB")]
    sound_blacklist: Vec<String>,

    /// Glob pattern for image files to exclude (repeatable)
    #[arg(long, value_name = "GLOB")]
    image_blacklist: Vec<String>,
}

#[derive(Subcommand, Debug)]
/// Top-level CLI subcommands.
enum Command {
    /// Validate a rule document then exit.
    Check {
        /// Path to the event_map.yaml to check
        path: PathBuf,
    },
    /// List discovered extension collections.
    Extensions,
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log);

    match &cli.command {
        Some(Command::Check { path }) => match eventmap::load_from_path(path) {
            Ok(map) => {
                let count = |rules: &Option<eventmap::RuleSet>| {
                    rules.as_ref().map(eventmap::RuleSet::len)
                };
                match (count(&map.sound), count(&map.image)) {
                    (Some(s), Some(i)) => println!("OK: {s} sound rule(s), {i} image rule(s)"),
                    (Some(s), None) => println!("OK: {s} sound rule(s), legacy images"),
                    (None, Some(i)) => println!("OK: legacy sounds, {i} image rule(s)"),
                    (None, None) => println!("OK: legacy sounds and images"),
                }
            }
            Err(e) => {
                eprintln!("{}", e.pretty());
                process::exit(1);
            }
        },
        Some(Command::Extensions) => {
            let dirs = config::extension_search_dirs(&cli.data_dir);
            for name in config::discover_extensions(&dirs) {
                println!("{name}");
            }
        }
        None => {
            if let Err(code) = run(&cli) {
                process::exit(code);
            }
        }
    }
}

/// Wire settings, catalog, and engine together, then run the stdin session.
fn run(cli: &Cli) -> Result<(), i32> {
    let settings_path = cli
        .config
        .clone()
        .unwrap_or_else(config::settings_path);
    let mut settings = match Settings::load(&settings_path) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e.pretty(), "settings unusable, falling back to defaults");
            Settings::default()
        }
    };
    if cli.uppercase {
        settings.display.uppercase = true;
    }
    if cli.deterministic_sounds {
        settings.audio.deterministic_sounds = true;
    }
    if cli.extension.is_some() {
        settings.current_extension = cli.extension.clone();
    }
    settings
        .audio
        .sound_blacklist
        .extend(cli.sound_blacklist.iter().cloned());
    settings
        .image_blacklist
        .extend(cli.image_blacklist.iter().cloned());

    let blacklists = Blacklists {
        sound: blacklist_or_exit(&settings.audio.sound_blacklist, MediaKind::Sound)?,
        image: blacklist_or_exit(&settings.image_blacklist, MediaKind::Image)?,
    };

    // Resolve and load the extension before touching any media; a broken
    // extension must abort startup, never degrade mid-session.
    let search_dirs = config::extension_search_dirs(&cli.data_dir);
    let extension = match settings.current_extension.as_deref() {
        Some(name) => {
            let Some(dir) = config::extension_dir(name, &search_dirs) else {
                eprintln!("extension '{name}' not found");
                return Err(1);
            };
            let map_path = dir.join(config::EVENT_MAP_FILE);
            let map = eventmap::load_from_path(&map_path).map_err(|e| {
                eprintln!("{}", e.pretty());
                1
            })?;
            info!(extension = name, "loaded extension");
            Some((name.to_string(), dir, map))
        }
        None => None,
    };

    let catalog = Catalog::load(
        &cli.data_dir,
        extension
            .as_ref()
            .map(|(name, dir, _)| (name.as_str(), dir.as_path())),
        &blacklists,
    )
    .map_err(|e| {
        eprintln!("{}", e.pretty());
        1
    })?;

    let flags = ModeFlags {
        deterministic_sounds: settings.audio.deterministic_sounds,
        uppercase: settings.display.uppercase,
    };
    let rng = RandomSource::new(cli.seed);
    let event_map = extension.map(|(_, _, map)| map);
    let mut responder = Responder::new(catalog, event_map, flags, rng);

    let themes = ThemeRegistry::load(&config::themes_dir());
    if let Some(theme) = themes.get(&settings.display.theme) {
        responder.set_palette(theme.color_palette.clone());
    } else {
        warn!(theme = %settings.display.theme, "unknown theme, keeping the default palette");
    }

    session::run(responder, themes, &settings);
    Ok(())
}

fn blacklist_or_exit(patterns: &[String], kind: MediaKind) -> Result<Blacklist, i32> {
    Blacklist::new(patterns).map_err(|e| {
        eprintln!("bad {} blacklist: {}", kind.label(), e.pretty());
        1
    })
}
