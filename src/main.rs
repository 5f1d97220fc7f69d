//! glyphtab - bitmap font sheet to glyph table converter
//!
//! ```text
//!   ###.#.#.   font.png  ──▶  font-data.h
//!   #...#.#.
//!   ###..#..   256 entries, one per byte value
//!   #...#.#.
//!   ###.#.#.
//! ```

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use glyphtab_codegen::OutputFormat;
use glyphtab_config::{Config, ConfigLoader};
use glyphtab_core::{Channel, InkTest};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// glyphtab - turn a 5-pixel-high font strip into a glyph table listing
#[derive(Parser, Debug)]
#[command(name = "glyphtab")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Font sheet image: glyphs left to right, one blank column after each
    #[arg(required_unless_present = "print_config")]
    image: Option<PathBuf>,

    /// Write the listing to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Listing format: c, rust or json
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Cells reserved per table entry (multiple of 5)
    #[arg(long)]
    capacity: Option<usize>,

    /// Characters in sheet order
    #[arg(long)]
    charset: Option<String>,

    /// Width of the blank space glyph
    #[arg(long)]
    space_width: Option<usize>,

    /// Ink test: nonzero or exact:<0-255>
    #[arg(long)]
    ink: Option<InkTest>,

    /// Pixel channel the ink test reads: red, green, blue, alpha or luma
    #[arg(long)]
    channel: Option<Channel>,

    /// Config file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    /// Layer command-line overrides on top of the loaded config
    fn apply(&self, config: &mut Config) {
        if let Some(ref path) = self.output {
            config.output.path = Some(path.clone());
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(capacity) = self.capacity {
            config.output.capacity = Some(capacity);
        }
        if let Some(ref charset) = self.charset {
            config.font.charset = charset.clone();
        }
        if let Some(width) = self.space_width {
            config.font.space_width = width;
        }
        if let Some(test) = self.ink {
            config.ink.test = test;
        }
        if let Some(channel) = self.channel {
            config.ink.channel = channel;
        }
    }
}

/// Read the sheet and render the complete listing in memory
fn generate_listing(image: &Path, config: &Config) -> anyhow::Result<String> {
    let options = config
        .generator_options()
        .context("Invalid font configuration")?;

    tracing::info!(
        "Converting {} ({} glyphs, ink: {})",
        image.display(),
        options.charset.len(),
        options.ink
    );

    let table = glyphtab_core::generate(image, &options)?;
    let listing = glyphtab_codegen::emit(&table, &config.emit_options(image))?;

    tracing::info!(
        "Generated {} listing, {} of 256 codes defined",
        config.output.format,
        table.defined_count()
    );

    Ok(listing)
}

fn write_listing(path: &Path, listing: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, listing).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(ref path) = args.config {
        loader = loader.with_file(path);
    }
    let mut config = loader.load()?;
    args.apply(&mut config);

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let image = args.image.as_deref().context("No font sheet given")?;
    let listing = generate_listing(image, &config)?;

    match config.output.path {
        Some(ref path) => write_listing(path, &listing),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(listing.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Exit code and stdout text for an argument error; `None` leaves help and
/// version output to clap
fn usage_error(err: &clap::Error) -> Option<(i32, String)> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some((1, err.render().to_string())),
    }
}

fn main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match usage_error(&err) {
            Some((code, text)) => {
                println!("{}", text);
                std::process::exit(code);
            }
            None => err.exit(),
        },
    };

    // Set up logging; stdout is reserved for the listing
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("glyphtab={}", log_level)),
        ))
        .init();

    tracing::debug!("glyphtab v{}", env!("CARGO_PKG_VERSION"));

    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;

    /// Solid 3-wide `A`, blank column, solid 5-wide `B`, blank column
    fn write_sheet(dir: &Path) -> PathBuf {
        let mut image = RgbaImage::from_pixel(10, 5, Rgba([0, 0, 0, 0]));
        for x in (0..3).chain(4..9) {
            for y in 0..5 {
                image.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        let path = dir.join("ab.png");
        image.save(&path).unwrap();
        path
    }

    fn ab_config() -> Config {
        let mut config = Config::default();
        config.font.charset = "AB".to_string();
        config
    }

    #[test]
    fn test_arg_parsing() {
        let args = Args::try_parse_from(["glyphtab", "font.png"]).unwrap();
        assert_eq!(args.image, Some(PathBuf::from("font.png")));
        assert!(!args.debug);
        assert!(!args.print_config);
        assert_eq!(args.format, None);
    }

    #[test]
    fn test_arg_parsing_with_options() {
        let args = Args::try_parse_from([
            "glyphtab",
            "-f",
            "rust",
            "-o",
            "src/font.rs",
            "--ink",
            "exact:1",
            "--channel",
            "red",
            "--space-width",
            "3",
            "font.png",
        ])
        .unwrap();
        assert_eq!(args.format, Some(OutputFormat::Rust));
        assert_eq!(args.output, Some(PathBuf::from("src/font.rs")));
        assert_eq!(args.ink, Some(InkTest::Exact(1)));
        assert_eq!(args.channel, Some(Channel::Red));
        assert_eq!(args.space_width, Some(3));
    }

    #[test]
    fn test_missing_image_is_a_usage_error() {
        let err = Args::try_parse_from(["glyphtab"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.render().to_string().contains("Usage"));
    }

    #[test]
    fn test_usage_error_exits_one_with_usage_text() {
        let err = Args::try_parse_from(["glyphtab"]).unwrap_err();
        let (code, text) = usage_error(&err).unwrap();
        assert_eq!(code, 1);
        assert!(text.contains("Usage:"), "{text}");
        assert!(text.contains("<IMAGE>"), "{text}");

        let err = Args::try_parse_from(["glyphtab", "--format", "yaml", "font.png"]).unwrap_err();
        assert_eq!(usage_error(&err).map(|(code, _)| code), Some(1));
    }

    #[test]
    fn test_help_and_version_are_left_to_clap() {
        let err = Args::try_parse_from(["glyphtab", "--help"]).unwrap_err();
        assert_eq!(usage_error(&err), None);
        let err = Args::try_parse_from(["glyphtab", "--version"]).unwrap_err();
        assert_eq!(usage_error(&err), None);
    }

    #[test]
    fn test_print_config_needs_no_image() {
        let args = Args::try_parse_from(["glyphtab", "--print-config"]).unwrap();
        assert!(args.print_config);
        assert_eq!(args.image, None);
    }

    #[test]
    fn test_bad_ink_rejected() {
        assert!(Args::try_parse_from(["glyphtab", "--ink", "bright", "font.png"]).is_err());
        assert!(Args::try_parse_from(["glyphtab", "-f", "yaml", "font.png"]).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::try_parse_from([
            "glyphtab",
            "--charset",
            "XYZ",
            "--capacity",
            "30",
            "--ink",
            "nonzero",
            "--channel",
            "luma",
            "font.png",
        ])
        .unwrap();
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.font.charset, "XYZ");
        assert_eq!(config.font.space_width, 2);
        assert_eq!(config.output.capacity, Some(30));
        assert_eq!(config.ink.test, InkTest::NonZero);
        assert_eq!(config.ink.channel, Channel::Luma);
        assert_eq!(config.output.path, None);
    }

    #[test]
    fn test_two_glyph_sheet_listing() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = write_sheet(dir.path());

        let listing = generate_listing(&sheet, &ab_config()).unwrap();
        let records: Vec<&str> = listing
            .lines()
            .filter(|l| l.trim_start().starts_with("{ "))
            .collect();

        assert_eq!(records.len(), 256);
        assert_eq!(records[65], format!("    {{ 65, 3, {{ {} }} }},", vec!["1"; 15].join(", ")));
        assert_eq!(records[66], format!("    {{ 66, 5, {{ {} }} }},", vec!["1"; 25].join(", ")));
        assert_eq!(records[32], format!("    {{ 32, 2, {{ {} }} }},", vec!["0"; 10].join(", ")));
        for (code, record) in records.iter().enumerate() {
            if ![32, 65, 66, 97, 98].contains(&code) {
                assert_eq!(record.to_string(), format!("    {{ {}, -1, {{ }} }},", code));
            }
        }
        assert!(listing.contains("from ab.png"));
    }

    #[test]
    fn test_listing_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = write_sheet(dir.path());
        let config = ab_config();

        assert_eq!(
            generate_listing(&sheet, &config).unwrap(),
            generate_listing(&sheet, &config).unwrap()
        );
    }

    #[test]
    fn test_narrow_sheet_fails() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = write_sheet(dir.path());
        let mut config = ab_config();
        config.font.charset = "ABC".to_string();

        let err = generate_listing(&sheet, &config).unwrap_err();
        assert!(err.to_string().contains("right edge"), "{err}");
    }

    #[test]
    fn test_write_listing_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gen").join("font.h");

        write_listing(&path, "listing\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "listing\n");
    }
}
