//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: filtered tool listing
//! - show: a single tool profile
//! - categories: the category set
//! - submit: send a new tool for review
//! - browse: interactive session (default)

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// martech-hub - The directory for growth operations tooling
#[derive(Parser, Debug)]
#[command(name = "martech-hub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tools matching the given filters
    List {
        /// Case-insensitive text matched against name and pitch
        #[arg(short, long)]
        search: Option<String>,

        /// Category id (seo, social, crm, ai, analytics, ads)
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Price bucket (all, free, entry, pro, enterprise)
        #[arg(short, long, default_value = "all")]
        price: String,
    },

    /// Show a tool's profile
    Show {
        /// Tool ID
        id: u64,
    },

    /// List the available categories
    Categories,

    /// Submit a new tool for editorial review
    Submit(SubmitArgs),

    /// Browse the directory interactively
    Browse,
}

/// Fields of a tool submission
#[derive(Args, Debug, Clone, Default)]
pub struct SubmitArgs {
    /// Software name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Category id
    #[arg(long, default_value = "")]
    pub category: String,

    /// One sentence summarizing the value proposition
    #[arg(long, default_value = "")]
    pub pitch: String,

    /// Detailed description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Pricing model (e.g. Freemium)
    #[arg(long, default_value = "")]
    pub pricing_model: String,

    /// Starting price (e.g. $49/mo)
    #[arg(long, default_value = "")]
    pub starting_at: String,

    /// Contact email
    #[arg(long, default_value = "")]
    pub email: String,

    /// Website URL
    #[arg(long)]
    pub website: Option<String>,

    /// Headquarters location
    #[arg(long)]
    pub location: Option<String>,

    /// Feature bullet (repeatable)
    #[arg(long = "feature")]
    pub features: Vec<String>,

    /// Integration (repeatable)
    #[arg(long = "integration")]
    pub integrations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::parse_from(["martech-hub"]);
        assert!(cli.command.is_none());
        assert!(!cli.is_verbose());
    }

    #[test]
    fn test_list_filters() {
        let cli = Cli::parse_from(["martech-hub", "list", "-s", "flow", "-C", "seo", "-p", "free"]);
        match cli.command {
            Some(Commands::List {
                search,
                category,
                price,
            }) => {
                assert_eq!(search.as_deref(), Some("flow"));
                assert_eq!(category.as_deref(), Some("seo"));
                assert_eq!(price, "free");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_show_requires_numeric_id() {
        assert!(Cli::try_parse_from(["martech-hub", "show", "abc"]).is_err());
        let cli = Cli::parse_from(["martech-hub", "show", "3"]);
        assert!(matches!(cli.command, Some(Commands::Show { id: 3 })));
    }

    #[test]
    fn test_submit_repeatable_fields() {
        let cli = Cli::parse_from([
            "martech-hub",
            "submit",
            "--name",
            "Acme",
            "--email",
            "a@acme.test",
            "--feature",
            "Dashboards",
            "--feature",
            "Alerts",
            "--integration",
            "Slack",
        ]);
        match cli.command {
            Some(Commands::Submit(args)) => {
                assert_eq!(args.name, "Acme");
                assert_eq!(args.features, vec!["Dashboards", "Alerts"]);
                assert_eq!(args.integrations, vec!["Slack"]);
                assert!(args.pitch.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["martech-hub", "categories", "--config", "/tmp/hub.yml", "-v"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/hub.yml")));
        assert!(cli.is_verbose());
    }
}
