use anyhow::{Result, anyhow};
use console::{Style, Term};
use copypasta::{ClipboardContext, ClipboardProvider};
use pwdgen::{GenerationConfig, Preset};
use zeroize::Zeroizing;

pub const MIN_SAFE_ENTROPY: f64 = 64.0;
pub const PARANOID_ENTROPY: f64 = 128.0;

pub const MIN_SAFE_PASSWORD_LENGTH: usize = 12;

pub struct OutputInfo {
    pub preset: Preset,
    pub config: GenerationConfig,
    pub alphabet_size: usize,
    pub entropy: f64,
}

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub enum ClipboardStatus {
    NotRequested,
    Copied,
    Failed(String),
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn tree_glyphs(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut ctx =
        ClipboardContext::new().map_err(|e| anyhow!("Failed to open clipboard: {}", e))?;

    ctx.set_contents(text.to_string())
        .map_err(|e| anyhow!("Failed to write to clipboard: {}", e))
}

pub fn strength_label(entropy: f64) -> &'static str {
    if entropy >= PARANOID_ENTROPY {
        "Paranoid"
    } else if entropy >= MIN_SAFE_ENTROPY {
        "Strong"
    } else {
        "Weak"
    }
}

fn status_style(secure: bool, options: &DisplayOptions) -> Style {
    match (options.color_support, secure) {
        (false, _) => Style::new(),
        (true, true) => Style::new().green(),
        (true, false) => Style::new().yellow(),
    }
}

// Only a successful copy in quiet mode keeps the password off stdout.
fn prints_password(clipboard: &ClipboardStatus, quiet: bool) -> bool {
    !(quiet && matches!(clipboard, ClipboardStatus::Copied))
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

pub fn display_output(
    password: &Zeroizing<String>,
    info: &OutputInfo,
    clipboard: &ClipboardStatus,
    options: &DisplayOptions,
) {
    let term = Term::stderr();
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    match clipboard {
        ClipboardStatus::Copied => {
            let style = status_style(true, options);
            term.write_line(&format!(
                "{} Copied to clipboard",
                style.apply_to(format!("[{}]", check_ok))
            ))
            .ok();
        }
        ClipboardStatus::Failed(reason) => {
            let style = status_style(false, options);
            term.write_line(&format!(
                "{} {}; printing password instead",
                style.apply_to(format!("[{}]", check_warn)),
                reason
            ))
            .ok();
        }
        ClipboardStatus::NotRequested => {}
    }

    if options.quiet {
        if prints_password(clipboard, options.quiet) {
            println!("{}", &**password);
        }
        return;
    }

    println!("Out:\n{}\n", &**password);

    display_settings(info, options);
    display_stats(info, password.chars().count(), options);
}

fn display_settings(info: &OutputInfo, options: &DisplayOptions) {
    let (mid, last) = tree_glyphs(options.unicode_support);
    let config = &info.config;

    println!("Settings:");
    println!("  {} Preset     {}", mid, info.preset.name());
    println!("  {} Lowercase  {}", mid, yes_no(config.include_lowercase));
    println!("  {} Uppercase  {}", mid, yes_no(config.include_uppercase));
    println!("  {} Numbers    {}", mid, yes_no(config.include_numbers));
    println!("  {} Symbols    {}", mid, yes_no(config.include_symbols));
    println!(
        "  {} Ambiguous  {}",
        mid,
        if config.exclude_ambiguous {
            "excluded"
        } else {
            "allowed"
        }
    );
    println!("  {} Source     OS CSPRNG", mid);
    println!("  {} Sampling   byte modulo alphabet size", last);
    println!();
}

fn display_stats(info: &OutputInfo, length: usize, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (mid, last) = tree_glyphs(options.unicode_support);

    let entropy_secure = info.entropy >= MIN_SAFE_ENTROPY;
    let entropy_style = status_style(entropy_secure, options);
    let entropy_icon = if entropy_secure { check_ok } else { check_warn };
    let status_text = strength_label(info.entropy);

    let length_secure = length >= MIN_SAFE_PASSWORD_LENGTH;
    let length_style = status_style(length_secure, options);
    let length_icon = if length_secure { check_ok } else { check_warn };

    println!("Stats:");
    println!(
        "  {} Entropy    {} {} bits ({})",
        mid,
        entropy_style.apply_to(format!("[{}]", entropy_icon)),
        entropy_style.apply_to(format!("{:.1}", info.entropy)),
        entropy_style.apply_to(status_text)
    );
    println!(
        "  {} Length     {} {} {}",
        mid,
        length_style.apply_to(format!("[{}]", length_icon)),
        length_style.apply_to(length),
        if length == 1 { "char" } else { "chars" }
    );
    println!("  {} Charset    {} chars", last, info.alphabet_size);

    println!(
        "\n{} Security: {}",
        entropy_style.apply_to(format!("[{}]", entropy_icon)),
        entropy_style.apply_to(status_text)
    );
}
