use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use waapuro::kana::KanaTables;
use waapuro::settings;
use waapuro::{romanize_units, romanize_with, RomanizeOptions};

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "waapuro", about = "Kana romanization")]
struct Cli {
    /// Write JSON trace events to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Romanize kana text given as arguments, or one line at a time from stdin
    Romanize {
        /// Kana text; reads stdin when omitted
        text: Vec<String>,
        /// Use Hepburn-style spellings (shi, chi, tsu, ja, ...)
        #[arg(long)]
        hepburnish: bool,
        /// Path to a settings TOML providing the default style
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Print one JSON object per input
        #[arg(long)]
        json: bool,
    },

    /// Show the romanization unit produced for each kana
    Explain {
        /// Kana text to explain
        text: String,
        /// Use Hepburn-style spellings
        #[arg(long)]
        hepburnish: bool,
    },

    /// Dump the kana table as `kana<TAB>romaji`
    Table {
        /// Dump small kana instead of basic kana
        #[arg(long)]
        small: bool,
    },

    /// Inspect settings files
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the embedded default settings TOML
    Export,
    /// Check that a settings TOML file is valid
    Validate {
        /// Path to the settings TOML file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        waapuro::init_tracing(dir);
    }

    match cli.command {
        Command::Romanize {
            text,
            hepburnish,
            settings,
            json,
        } => {
            let options = resolve_options(settings, hepburnish);
            romanize_cmd(&text, &options, json);
        }
        Command::Explain { text, hepburnish } => {
            explain_cmd(&text, &RomanizeOptions { hepburnish });
        }
        Command::Table { small } => table_cmd(small),
        Command::Settings { action } => match action {
            SettingsAction::Export => print!("{}", settings::default_toml()),
            SettingsAction::Validate { file } => settings_validate(&file),
        },
    }
}

/// Settings file supplies the default; `--hepburnish` forces Hepburn-ish on.
fn resolve_options(settings_file: Option<PathBuf>, hepburnish: bool) -> RomanizeOptions {
    if let Some(path) = settings_file {
        let content = die!(
            fs::read_to_string(&path),
            "Error reading {}: {}",
            path.display()
        );
        die!(settings::init_custom(content), "Error: {}");
    }
    let mut options = settings::settings().romanize;
    options.hepburnish |= hepburnish;
    options
}

fn romanize_cmd(text: &[String], options: &RomanizeOptions, json: bool) {
    let emit = |kana: &str| {
        let romaji = romanize_with(kana, options);
        if json {
            println!("{}", serde_json::json!({ "kana": kana, "romaji": romaji }));
        } else {
            println!("{romaji}");
        }
    };

    if !text.is_empty() {
        text.iter().for_each(|kana| emit(kana));
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        emit(&line);
    }
}

fn explain_cmd(text: &str, options: &RomanizeOptions) {
    let units = romanize_units(text, options);
    println!("{}", units.join(" | "));
    println!("=> {}", units.concat());
}

fn table_cmd(small: bool) {
    let tables = KanaTables::global();
    if small {
        for (kana, romaji) in tables.small_entries() {
            println!("{kana}\t{romaji}");
        }
    } else {
        for (kana, romaji) in tables.basic_entries() {
            println!("{kana}\t{romaji}");
        }
    }
}

fn settings_validate(file: &Path) {
    let content = die!(
        fs::read_to_string(file),
        "Error reading {}: {}",
        file.display()
    );
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!("OK: romanize.hepburnish={}", s.romanize.hepburnish);
}
