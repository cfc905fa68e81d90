use anyhow::{Context, Result, bail};
use clap::Parser;
use polished_text_config::{Config, OutputFormat};
use polished_text_engine::{EmptySpans, PairGap, SegmentOptions, SpanLines};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

mod output;

/// Render text annotated with `~~deleted~~` and `**inserted**` edit markup.
#[derive(Debug, Parser)]
#[command(name = "polished-text", version, about)]
struct Cli {
    /// Annotated text file; reads stdin when omitted or `-`
    file: Option<PathBuf>,

    /// Output format: html, json, ansi, markup, original, revised or summary
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Whitespace allowed between a deletion and its replacement:
    /// adjacent, spaces-and-tabs or inline-whitespace
    #[arg(long, value_name = "GAP")]
    pair_gap: Option<PairGap>,

    /// Drop deletions and insertions with empty content
    #[arg(long)]
    drop_empty: bool,

    /// Do not let a span run across a line break
    #[arg(long)]
    single_line: bool,

    /// Config file to use instead of ~/.config/polished-text/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Layers command-line flags over the config file.
    fn settings(&self, config: Config) -> (OutputFormat, SegmentOptions) {
        let mut opts = config.segmenter;
        if let Some(gap) = self.pair_gap {
            opts.pair_gap = gap;
        }
        if self.drop_empty {
            opts.empty_spans = EmptySpans::Drop;
        }
        if self.single_line {
            opts.span_lines = SpanLines::Single;
        }
        (self.format.unwrap_or(config.output), opts)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let (format, opts) = cli.settings(config);
    log::debug!("format {format}, options {opts:?}");

    let input = read_input(cli.file.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_output(&mut out, &input, &opts, format)?;
    out.flush()?;
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let path = Config::expand_path(path);
            match Config::load_from_path(&path)? {
                Some(config) => Ok(config),
                None => bail!("Config file '{}' does not exist", path.display()),
            }
        }
        None => {
            let loaded = Config::load()?;
            if loaded.is_none() {
                log::debug!(
                    "no config at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(loaded.unwrap_or_default())
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        _ => io::read_to_string(io::stdin()).context("Failed to read stdin"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("polished-text").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn config_values_apply_without_flags() {
        let config = Config {
            output: OutputFormat::Html,
            segmenter: SegmentOptions {
                pair_gap: PairGap::Adjacent,
                ..SegmentOptions::default()
            },
        };
        let (format, opts) = parse(&[]).settings(config);
        assert_eq!(format, OutputFormat::Html);
        assert_eq!(opts.pair_gap, PairGap::Adjacent);
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            output: OutputFormat::Html,
            segmenter: SegmentOptions::default(),
        };
        let cli = parse(&[
            "--format",
            "json",
            "--pair-gap",
            "spaces-and-tabs",
            "--drop-empty",
            "--single-line",
        ]);
        let (format, opts) = cli.settings(config);
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(
            opts,
            SegmentOptions {
                pair_gap: PairGap::SpacesAndTabs,
                empty_spans: EmptySpans::Drop,
                span_lines: SpanLines::Single,
            }
        );
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Cli::try_parse_from(["polished-text", "--format", "pdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn positional_file() {
        let cli = parse(&["answer.txt"]);
        assert_eq!(cli.file, Some(PathBuf::from("answer.txt")));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.toml");
        let err = load_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "output = \"summary\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.output, OutputFormat::Summary);
    }

    #[test]
    fn reads_file_input() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("answer.txt");
        fs::write(&path, "~~a~~**b**").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "~~a~~**b**");
    }

    #[test]
    fn missing_input_file_names_path() {
        let err = read_input(Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
