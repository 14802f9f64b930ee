use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "site",
    version,
    about = "Static builder and browser for the society website",
    long_about = "Builds the static site from the built-in content store, or browses it from the terminal.\n\nExamples:\n  site build --out public\n  site build --offline\n  site list events --category future\n  site list videos --search brain --page 2\n  site show faons-icn-2022"
)]
pub struct Cli {
    #[arg(
        short = 'c',
        long = "config",
        default_value = "site.ron",
        help = "RON configuration file; defaults are used when it does not exist."
    )]
    pub config: PathBuf,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v debug, -vv trace)."
    )]
    pub verbose: u8,

    #[arg(long = "log-to", value_enum, default_value_t = LogTarget::Terminal)]
    pub log_to: LogTarget,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render every page into the output directory.
    Build {
        #[arg(long = "out", help = "Output directory (overrides the config file).")]
        out: Option<PathBuf>,
        #[arg(long = "offline", help = "Skip network checks for remote images.")]
        offline: bool,
    },
    /// Print one page of a section.
    List {
        #[arg(value_enum)]
        section: SectionArg,
        #[arg(short = 's', long = "search", default_value = "")]
        search: String,
        #[arg(short = 'k', long = "category", default_value = "all")]
        category: String,
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: usize,
    },
    /// Print one event in full.
    Show { id: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionArg {
    Events,
    Videos,
    Publications,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_arguments_parse() {
        let cli = Cli::try_parse_from([
            "site", "-vv", "list", "events", "--search", "brain", "--category", "future", "--page",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("site.ron"));
        match cli.command {
            Command::List {
                section,
                search,
                category,
                page,
            } => {
                assert_eq!(section, SectionArg::Events);
                assert_eq!(search, "brain");
                assert_eq!(category, "future");
                assert_eq!(page, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn build_flags_parse() {
        let cli = Cli::try_parse_from(["site", "build", "--out", "dist", "--offline"]).unwrap();
        match cli.command {
            Command::Build { out, offline } => {
                assert_eq!(out, Some(PathBuf::from("dist")));
                assert!(offline);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(Cli::try_parse_from(["site", "list", "podcasts"]).is_err());
    }
}
