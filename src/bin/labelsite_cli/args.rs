//! Command-line surface for `labelsite-cli`.

#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use labelsite::config::SettingsOverrides;
use labelsite::domain::resources::Resource;

#[derive(Parser, Debug)]
#[command(
    name = "labelsite-cli",
    version,
    about = "Browse labelsite content lists page by page",
    long_about = None
)]
pub struct Cli {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "LABELSITE_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Path to file containing the admin token (takes precedence over env)
    #[arg(long, env = "LABELSITE_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    /// Admin token from env (CLI flag intentionally disabled to avoid shell history leaks)
    #[arg(hide = true, env = "LABELSITE_TOKEN")]
    pub token_env: Option<String>,

    #[command(flatten)]
    pub overrides: SettingsOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Blog posts
    Blogs(ResourceArgs),
    /// Services offered on the services page
    Services(ResourceArgs),
    /// Gallery images
    Gallery(ResourceArgs),
    /// Customer testimonials
    Testimonials(ResourceArgs),
    /// Quote requests from the contact and export forms
    Quotes(ResourceArgs),
}

impl Commands {
    pub fn into_parts(self) -> (Resource, ListCmd) {
        match self {
            Commands::Blogs(args) => (Resource::Blogs, args.action),
            Commands::Services(args) => (Resource::Services, args.action),
            Commands::Gallery(args) => (Resource::Gallery, args.action),
            Commands::Testimonials(args) => (Resource::Testimonials, args.action),
            Commands::Quotes(args) => (Resource::Quotes, args.action),
        }
    }
}

#[derive(Parser, Debug)]
pub struct ResourceArgs {
    #[command(subcommand)]
    pub action: ListCmd,
}

#[derive(Subcommand, Debug)]
pub enum ListCmd {
    /// Fetch one page; out-of-range pages are clamped
    List {
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
        /// Page size (defaults to listing.per_page)
        #[arg(long)]
        limit: Option<u64>,
        /// Include the rendered pager HTML in the output
        #[arg(long, default_value_t = false)]
        html: bool,
        /// Base href for pager links (defaults to /<resource>)
        #[arg(long)]
        href: Option<String>,
    },
    /// Fetch every page in order, one JSON line per page
    Walk {
        #[arg(long)]
        limit: Option<u64>,
    },
}
