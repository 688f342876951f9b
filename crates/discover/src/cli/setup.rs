use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use discoverapp::model::{DisciplinaryType, Domain, ViewerRole};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
}

/// "v0.1.0" for builds outside git, "v0.1.0 (abc1234)" otherwise.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("DISCOVER_GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{} ({})", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "discover",
    bin_name = "discover",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "Enable shell completions:\n  eval \"$(discover completions bash)\"  # add to ~/.bashrc\n  eval \"$(discover completions zsh)\"   # add to ~/.zshrc"
)]
#[command(about = "Browse artists, venues, resources and more with faceted filters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Debug logging on stderr (DISCOVER_LOG overrides)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

pub fn build_command() -> clap::Command {
    Cli::command()
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog items matching the given filters
    #[command(alias = "ls", display_order = 1)]
    List(ListArgs),

    /// Show tag categories and their tags
    #[command(display_order = 2)]
    Tags {
        /// Only this domain (all domains when absent)
        #[arg(short, long)]
        domain: Option<Domain>,
    },

    /// Show the subfilters available for a domain
    #[command(display_order = 3)]
    Subfilters {
        /// Domain to describe (configured default when absent)
        #[arg(short, long)]
        domain: Option<Domain>,
    },

    /// Show the attribute options of a domain
    #[command(display_order = 4)]
    Attributes {
        /// Domain to describe (configured default when absent)
        #[arg(short, long)]
        domain: Option<Domain>,
    },

    /// Show the effective configuration
    #[command(display_order = 10)]
    Config,

    /// Generate shell completion scripts
    #[command(display_order = 11)]
    Completions {
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Content domain to list (e.g. artists, venue, Brands)
    #[arg(short, long)]
    pub domain: Option<Domain>,

    /// Case-insensitive text matched against name, location and tags
    #[arg(short, long)]
    pub search: Option<String>,

    /// Select a tag (repeatable; all selected tags must match)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Attribute option for the domain (style for artists, type otherwise)
    #[arg(short, long = "attr", value_name = "OPTION")]
    pub attribute: Option<String>,

    /// Activate a subfilter of the domain (repeatable)
    #[arg(short = 'f', long = "subfilter", value_name = "SUBFILTER")]
    pub subfilters: Vec<String>,

    /// Artists only: all, single or multi
    #[arg(long)]
    pub disciplinary: Option<DisciplinaryType>,

    /// Viewer role: regular, artist, venue, brand or resource
    #[arg(short, long)]
    pub role: Option<ViewerRole>,

    /// JSON catalog file (array of items) instead of the built-in sample
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Print items as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        build_command().debug_assert();
    }

    #[test]
    fn test_naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["discover"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_list_accepts_repeated_filters() {
        let cli = Cli::try_parse_from([
            "discover", "list", "-d", "venue", "-t", "Club", "--tag", "Outdoor", "-f", "clubs",
            "--disciplinary", "multi",
        ])
        .unwrap();
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.domain, Some(Domain::Venues));
        assert_eq!(args.tags, ["Club", "Outdoor"]);
        assert_eq!(args.subfilters, ["clubs"]);
        assert_eq!(args.disciplinary, Some(DisciplinaryType::Multi));
    }

    #[test]
    fn test_unknown_domain_is_a_parse_error() {
        assert!(Cli::try_parse_from(["discover", "list", "--domain", "planets"]).is_err());
    }
}
