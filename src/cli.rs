use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Cells in a quad stash tab, the most items one tab can hold
pub const QUAD_TAB_SIZE: usize = 24 * 24;

#[derive(Parser, Debug)]
#[command(name = "stashvision", version, about = "Index and analyze your Path of Exile stash")]
pub struct Cli {
    /// Show debug log messages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log to a file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Config file (default: <config dir>/stashvision/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Item index database (overrides the config)
    #[arg(long, global = true)]
    pub index: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Query stash items index
    #[command(visible_alias = "q")]
    Query(QueryArgs),

    /// Evaluate recipes against the index
    #[command(visible_alias = "r")]
    Recipe(RecipeArgs),

    /// Fetch one stash tab and index it
    Ingest(SourceArgs),

    /// Run the stash indexing server
    #[command(visible_alias = "s")]
    Server(ServerArgs),
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Query string, e.g. `frameType:rare identified:0 ilvl:>=60`
    #[arg(short = 's', long = "query-string")]
    pub query: String,

    /// Print items as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Print item positions and dimensions only
    #[arg(short, long, conflicts_with = "json")]
    pub positions: bool,

    /// Maximum number of items returned
    #[arg(long, default_value_t = QUAD_TAB_SIZE)]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct RecipeArgs {
    /// Recipe name
    #[arg(short = 'n', long, default_value = "unid_chaos")]
    pub recipe_name: String,

    /// List available recipes
    #[arg(short = 'l', long = "list-recipes")]
    pub list: bool,

    /// Stop after the first complete set
    #[arg(short, long)]
    pub first: bool,

    /// Print item positions and dimensions only
    #[arg(short, long)]
    pub positions: bool,

    /// Only use items from this tab (default: all tabs)
    #[arg(short, long)]
    pub tab_index: Option<u32>,

    /// Id of an indexed item that must be part of the first set
    #[arg(long)]
    pub target: Option<String>,
}

/// Overrides for the stash to read
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Account name
    #[arg(short, long)]
    pub account_name: Option<String>,

    /// League name
    #[arg(short = 'L', long)]
    pub league: Option<String>,

    /// Value of POESESSID
    #[arg(short = 's', long)]
    pub poe_session_id: Option<String>,

    /// Tab index
    #[arg(short, long)]
    pub tab_index: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ServerArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Seconds between fetches
    #[arg(short, long)]
    pub interval: Option<u64>,
}
