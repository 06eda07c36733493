mod ui;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, warn};
use pwdgen::{
    GenerationConfig, OsRandom, Overrides, Preset, compose_alphabet, generate_from_alphabet,
};

#[derive(Parser)]
#[command(
    name = "pwdgen",
    version,
    about = "Generate random passwords and PINs from configurable character sets"
)]
struct Cli {
    #[arg(short, long, value_enum, default_value = "default")]
    preset: PresetArg,

    /// Password length, 1 to 256 (default depends on the preset)
    #[arg(short, long, allow_hyphen_values = true)]
    length: Option<String>,

    /// Include lowercase letters
    #[arg(long, overrides_with = "no_lowercase")]
    lowercase: bool,
    /// Exclude lowercase letters
    #[arg(long, overrides_with = "lowercase")]
    no_lowercase: bool,

    /// Include uppercase letters
    #[arg(long, overrides_with = "no_uppercase")]
    uppercase: bool,
    /// Exclude uppercase letters
    #[arg(long, overrides_with = "uppercase")]
    no_uppercase: bool,

    /// Include digits
    #[arg(long, overrides_with = "no_numbers")]
    numbers: bool,
    /// Exclude digits
    #[arg(long, overrides_with = "numbers")]
    no_numbers: bool,

    /// Include symbols
    #[arg(long, overrides_with = "no_symbols")]
    symbols: bool,
    /// Exclude symbols
    #[arg(long, overrides_with = "symbols")]
    no_symbols: bool,

    /// Leave out look-alike characters (i l 1 L o 0 O)
    #[arg(long, overrides_with = "include_ambiguous")]
    exclude_ambiguous: bool,
    /// Allow look-alike characters
    #[arg(long, overrides_with = "exclude_ambiguous")]
    include_ambiguous: bool,

    /// Copy the password to the clipboard
    #[arg(short, long)]
    copy: bool,

    /// Print only the password
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum PresetArg {
    Default,
    Simple,
    Strong,
    Pin,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Default => Preset::Default,
            PresetArg::Simple => Preset::Simple,
            PresetArg::Strong => Preset::Strong,
            PresetArg::Pin => Preset::Pin,
        }
    }
}

// A pair of flags maps to Some only when one of them was given.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Cli {
    fn overrides(&self) -> Result<Overrides> {
        let length = self
            .length
            .as_deref()
            .map(pwdgen::validate_length)
            .transpose()?;

        Ok(Overrides {
            length,
            lowercase: flag_pair(self.lowercase, self.no_lowercase),
            uppercase: flag_pair(self.uppercase, self.no_uppercase),
            numbers: flag_pair(self.numbers, self.no_numbers),
            symbols: flag_pair(self.symbols, self.no_symbols),
            exclude_ambiguous: flag_pair(self.exclude_ambiguous, self.include_ambiguous),
        })
    }

    fn resolve(&self) -> Result<(Preset, GenerationConfig)> {
        let preset = Preset::from(self.preset);
        let config = preset.config().with_overrides(&self.overrides()?);
        Ok((preset, config))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let (preset, config) = cli.resolve()?;

    let alphabet = compose_alphabet(&config)?;
    debug!(
        "preset={} length={} alphabet_size={}",
        preset.name(),
        config.length,
        alphabet.len()
    );

    let password = generate_from_alphabet(&alphabet, config.length, &mut OsRandom)
        .context("Failed to generate password")?;

    let clipboard = if cli.copy {
        match ui::copy_to_clipboard(&password) {
            Ok(()) => ui::ClipboardStatus::Copied,
            Err(e) => {
                warn!("clipboard write failed: {:#}", e);
                ui::ClipboardStatus::Failed(e.to_string())
            }
        }
    } else {
        ui::ClipboardStatus::NotRequested
    };

    let info = ui::OutputInfo {
        preset,
        config,
        alphabet_size: alphabet.len(),
        entropy: alphabet.entropy_bits(config.length),
    };

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    ui::display_output(&password, &info, &clipboard, &options);

    Ok(())
}
