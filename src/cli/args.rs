//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

const LONG_ABOUT: &str = "\
Generate directory structures from a one-line layout expression.

Levels:
  name          one directory called 'name'
  name:5        five directories 'name 1' .. 'name 5'
  name:d        four directories 'name a' .. 'name d'

Nesting:
  site:5 > tree:10
                every 'site N' gets ten 'tree N' subdirectories

Lists:
  site:2 > [src, docs > img]
                every 'site N' gets 'src' and 'docs/img'
  [a, b] > c    'a/c' and 'b/c'";

/// Generate directory layouts using a simple layout expression
#[derive(Parser, Debug)]
#[command(name = "dirlayout")]
#[command(author, version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Layout expression describing the directory structure (e.g. 'site:5 > tree:10')
    #[arg(short, long, env = "DIRLAYOUT_LAYOUT")]
    pub layout: Option<String>,

    /// Base path where the directories are created [default: .]
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Debug logging (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print the token stream of the layout (does not create directories)
    #[arg(long)]
    pub tokens: bool,

    /// Print the parsed layout expression (does not create directories)
    #[arg(long)]
    pub ast: bool,

    /// Print the expanded tree without creating directories
    #[arg(short, long, visible_alias = "dry-run")]
    pub preview: bool,

    /// Print the effective settings as TOML
    #[arg(long)]
    pub show_config: bool,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completion: Option<clap_complete::Shell>,
}
