//! Minimal CLI: json sample(s) → TypeScript declarations
use std::ffi::{OsStr, OsString};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use crate::codegen::{Indent, OutputKind, Style};

pub const USAGE: &str = "Usage:\n\ttsj <json_paths> [--tabs | --spaces] [--type | --interface]";

/// `--` options that mean something; any other `--word` is dropped.
const KNOWN_FLAGS: &[&str] = &["--tabs", "--spaces", "--type", "--interface", "--help", "--version"];

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer a TypeScript interface or type alias from sample JSON files
#[derive(Parser, Debug)]
#[command(name = "tsj", version)]
pub struct CommandLineInterface {
    /// one or more JSON files; one declaration block is printed per file, in order
    paths: Vec<PathBuf>,

    /// indent with a tab character (wins over --spaces)
    #[arg(long, default_value_t = false)]
    tabs: bool,

    /// indent with four spaces (default is two)
    #[arg(long, default_value_t = false)]
    spaces: bool,

    /// emit `type Name = { ... }` aliases (wins over --interface)
    #[arg(long = "type", default_value_t = false)]
    type_alias: bool,

    /// emit `interface Name { ... }` (default)
    #[arg(long, default_value_t = false)]
    interface: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    /// Parse the process arguments. Help and version requests come back as
    /// `Err` too; [`clap::Error::use_stderr`] tells them apart.
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse_from(classify_args(std::env::args_os()))
    }

    /// Report a [`load`](Self::load) failure. Only exit statuses 0 and 1 are
    /// ever used.
    pub fn report_load_error(error: &clap::Error) -> ExitCode {
        // nothing useful to do if stderr itself is gone
        let _ = error.print();
        if error.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
    }

    pub fn style(&self) -> Style {
        let indent = if self.tabs {
            Indent::Tab
        } else if self.spaces {
            Indent::FourSpaces
        } else {
            Indent::TwoSpaces
        };
        // --interface only restates the default
        let kind = if self.type_alias { OutputKind::TypeAlias } else { OutputKind::Interface };
        Style { indent, kind }
    }

    pub fn run(&self) -> ExitCode {
        if self.paths.is_empty() {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
        match self.process_all() {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                let stderr = std::io::stderr();
                colored::control::set_override(stderr_wants_color(
                    stderr.is_terminal(),
                    std::env::var_os("NO_COLOR").as_deref(),
                ));
                eprintln!("{} {error:#}", "error:".red().bold());
                ExitCode::FAILURE
            }
        }
    }

    /// Stops at the first failing path; later paths are never opened.
    fn process_all(&self) -> Result<()> {
        let style = self.style();
        for path in &self.paths {
            let block = crate::driver::process(path, &style)?;
            println!("{block}");
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Rearrange raw arguments for clap.
///
/// Anything not starting with `--` is a path, even `-x` or `-h`. Known
/// `--` flags are kept once each, unknown ones are dropped. Paths go after a
/// `--` separator so clap never reads them as options.
fn classify_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let bin = args.next().unwrap_or_else(|| OsString::from("tsj"));

    let mut flags = Vec::<OsString>::new();
    let mut paths = Vec::<OsString>::new();
    for arg in args {
        if !arg.as_encoded_bytes().starts_with(b"--") {
            paths.push(arg);
        } else if KNOWN_FLAGS.iter().any(|f| arg.as_os_str() == OsStr::new(f)) && !flags.contains(&arg) {
            flags.push(arg);
        }
    }

    let mut out = Vec::with_capacity(flags.len() + paths.len() + 2);
    out.push(bin);
    out.extend(flags);
    out.push(OsString::from("--"));
    out.extend(paths);
    out
}

/// Colour the `error:` prefix only when stderr is a terminal and `NO_COLOR`
/// is unset or empty.
fn stderr_wants_color(is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    is_terminal && no_color.is_none_or(OsStr::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommandLineInterface {
        CommandLineInterface::try_parse_from(classify_args(std::iter::once("tsj").chain(args.iter().copied())))
            .unwrap()
    }

    #[test]
    fn defaults_to_two_spaces_and_interfaces() {
        let cli = parse(&["a.json"]);
        assert_eq!(cli.style(), Style { indent: Indent::TwoSpaces, kind: OutputKind::Interface });
    }

    #[test]
    fn flags_select_style() {
        assert_eq!(parse(&["a.json", "--tabs"]).style().indent, Indent::Tab);
        assert_eq!(parse(&["--spaces", "a.json"]).style().indent, Indent::FourSpaces);
        assert_eq!(parse(&["a.json", "--type"]).style().kind, OutputKind::TypeAlias);
        assert_eq!(parse(&["a.json", "--interface"]).style().kind, OutputKind::Interface);
    }

    #[test]
    fn tabs_and_type_win_when_both_given() {
        let style = parse(&["--spaces", "--tabs", "--interface", "--type", "a.json"]).style();
        assert_eq!(style, Style { indent: Indent::Tab, kind: OutputKind::TypeAlias });
    }

    #[test]
    fn paths_keep_argument_order() {
        let cli = parse(&["b.json", "--tabs", "a.json", "c.json"]);
        assert_eq!(cli.paths, [PathBuf::from("b.json"), PathBuf::from("a.json"), PathBuf::from("c.json")]);
    }

    #[test]
    fn single_dash_arguments_are_paths() {
        let cli = parse(&["-dash.json", "-h", "-V", "-", "--tabs"]);
        assert_eq!(
            cli.paths,
            [PathBuf::from("-dash.json"), PathBuf::from("-h"), PathBuf::from("-V"), PathBuf::from("-")]
        );
        assert_eq!(cli.style().indent, Indent::Tab);
    }

    #[test]
    fn unknown_double_dash_flags_are_ignored() {
        let cli = parse(&["a.json", "--verbose", "--", "--type=x", "--tabs"]);
        assert_eq!(cli.paths, [PathBuf::from("a.json")]);
        assert_eq!(cli.style(), Style { indent: Indent::Tab, kind: OutputKind::Interface });
    }

    #[test]
    fn repeated_flags_are_accepted() {
        let cli = parse(&["--type", "a.json", "--type", "--spaces", "--spaces"]);
        assert_eq!(cli.style(), Style { indent: Indent::FourSpaces, kind: OutputKind::TypeAlias });
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = CommandLineInterface::try_parse_from(classify_args(["tsj", "--help"])).unwrap_err();
        assert!(!err.use_stderr());
    }

    #[test]
    fn no_paths_parses_but_fails_to_run() {
        let cli = parse(&["--tabs"]);
        assert!(cli.paths.is_empty());
        assert_eq!(cli.run(), ExitCode::FAILURE);
    }

    #[test]
    fn color_follows_stderr() {
        assert!(stderr_wants_color(true, None));
        assert!(stderr_wants_color(true, Some(OsStr::new(""))));
        assert!(!stderr_wants_color(true, Some(OsStr::new("1"))));
        assert!(!stderr_wants_color(false, None));
    }
}
