//! # VtReport - Styled Messages From the Command Line
//!
//! The `vtreport` binary is a thin front end over [`vtreport_render`]. This
//! library half holds the argument definitions and the command runner so the
//! same code path can be driven from tests with an in-memory writer.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use vtreport_render::{strip_styles, ReportConfig, Reporter, StyleList};

/// Print styled messages and colorized XML
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Allow `color_<N>` styles regardless of TERM
    #[arg(long = "force-256", global = true)]
    pub force_256: bool,

    /// When to emit escape sequences
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every named style, rendered in itself
    Styles,

    /// Print a message
    Write {
        text: String,

        /// Style name; repeat to combine
        #[arg(short, long = "style", value_name = "STYLE")]
        styles: Vec<String>,

        /// Do not end the message with a newline
        #[arg(long)]
        no_newline: bool,
    },

    /// Print a title line
    Title { text: String },

    /// Print a subtitle line
    Subtitle { text: String },

    /// Pretty-print and colorize an XML document
    Xml {
        /// Input file; stdin when absent or `-`
        file: Option<PathBuf>,

        /// Color the whole document in these styles instead of per token
        #[arg(short, long = "style", value_name = "STYLE")]
        styles: Vec<String>,

        /// List syntax errors above malformed documents
        #[arg(long)]
        show_errors: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Whether escapes survive, given what the output terminal supports.
    pub fn keep_escapes(self, terminal_colors: bool) -> bool {
        match self {
            ColorChoice::Auto => terminal_colors,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Loads the configuration named on the command line, or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<ReportConfig> {
    match path {
        Some(path) => Ok(ReportConfig::from_file(path)?),
        None => Ok(ReportConfig::default()),
    }
}

/// Runs `cli` against `out`.
///
/// `terminal_colors` is what `--color auto` resolves to.
pub fn run(cli: &Cli, out: &mut impl Write, terminal_colors: bool) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if cli.force_256 {
        config.force_support_256_color = true;
    }
    if let Command::Xml { show_errors: true, .. } = cli.command {
        config.display_xml_errors = true;
    }
    let reporter = Reporter::with_config(config);
    tracing::debug!(?reporter, "reporter ready");

    let rendered = render(&reporter, &cli.command)?;
    let rendered = if cli.color.keep_escapes(terminal_colors) {
        rendered
    } else {
        strip_styles(&rendered)
    };

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn render(reporter: &Reporter, command: &Command) -> Result<String> {
    let rendered = match command {
        Command::Styles => {
            let mut listing = String::new();
            for (name, _) in reporter.styles() {
                listing.push_str(&reporter.write(name, name, true));
            }
            listing
        }
        Command::Write {
            text,
            styles,
            no_newline,
        } => reporter.write(text, styles.as_slice(), !no_newline),
        Command::Title { text } => reporter.title(text),
        Command::Subtitle { text } => reporter.subtitle(text),
        Command::Xml { file, styles, .. } => {
            let input = read_input(file.as_deref())?;
            let block = (!styles.is_empty()).then(|| StyleList::from(styles.as_slice()));
            reporter.write_xml(&input, block)?
        }
    };
    Ok(rendered)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vtreport").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_write_with_styles() {
        let cli = parse(&["write", "hi", "-s", "red", "--style", "bold", "--no-newline"]);
        match cli.command {
            Command::Write {
                text,
                styles,
                no_newline,
            } => {
                assert_eq!(text, "hi");
                assert_eq!(styles, vec!["red", "bold"]);
                assert!(no_newline);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["title", "T", "--color", "never", "--force-256", "-v"]);
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(cli.force_256);
        assert!(cli.verbose);
    }

    #[test]
    fn test_keep_escapes() {
        assert!(ColorChoice::Auto.keep_escapes(true));
        assert!(!ColorChoice::Auto.keep_escapes(false));
        assert!(ColorChoice::Always.keep_escapes(false));
        assert!(!ColorChoice::Never.keep_escapes(true));
    }

    #[test]
    fn test_run_write() {
        let mut out = Vec::new();
        run(&parse(&["write", "done", "-s", "green"]), &mut out, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[32mdone\x1b[0m\n");
    }

    #[test]
    fn test_run_strips_when_not_a_terminal() {
        let mut out = Vec::new();
        run(&parse(&["title", "Results"]), &mut out, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Results\n");
    }

    #[test]
    fn test_run_force_256() {
        let mut out = Vec::new();
        let cli = parse(&["write", "x", "-s", "color_255", "--force-256", "--no-newline"]);
        run(&cli, &mut out, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[38;5;255mx\x1b[0m");
    }

    #[test]
    fn test_run_styles_lists_registry() {
        let mut out = Vec::new();
        run(&parse(&["styles", "--color", "never"]), &mut out, true).unwrap();
        let listing = String::from_utf8(out).unwrap();
        let names: Vec<&str> = listing.lines().collect();
        assert_eq!(names.first(), Some(&"none"));
        assert!(names.contains(&"bg_white"));
    }
}
