use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use tracing::{info, warn};

use stashvision::cli::{Cli, Command, QueryArgs, RecipeArgs, ServerArgs, SourceArgs};
use stashvision::client::PoeClient;
use stashvision::config::Config;
use stashvision::ingest::{run_server, Ingestor};
use stashvision::logging;
use stashvision::recipe::{RecipeRegistry, RecipeScanner};
use stashvision::repository::{Database, IndicatifProgress, ItemFilter, ItemIndex, NoopProgress};
use stashvision::util::{format_positions, format_totals, RewardTotals};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(index) = cli.index {
        config.index_path = Some(index);
    }

    match cli.command {
        Command::Query(args) => query(&config, &args).await,
        Command::Recipe(args) => recipe(&config, &args).await,
        Command::Ingest(args) => ingest(config, &args).await,
        Command::Server(args) => server(config, &args).await,
    }
}

async fn open_index(config: &Config) -> Result<Database> {
    let path = config.index_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create index directory {}", parent.display()))?;
    }
    info!(path = %path.display(), "using index");

    let path_str = path.to_str().context("Invalid index path encoding")?;
    let db = Database::new(path_str).await?;
    db.init_schema().await?;
    Ok(db)
}

async fn query(config: &Config, args: &QueryArgs) -> Result<()> {
    let filter: ItemFilter = args.query.parse().context("Invalid query string")?;
    let db = open_index(config).await?;
    let items = db.query(&filter, Some(args.limit)).await?;

    if args.positions {
        for item in &items {
            println!("{}", item.position());
        }
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        println!("{} search results", items.len());
        for (i, item) in items.iter().enumerate() {
            println!("- {}: {}", i + 1, item.summary());
        }
    }
    Ok(())
}

async fn recipe(config: &Config, args: &RecipeArgs) -> Result<()> {
    let registry = RecipeRegistry::with_defaults();
    if args.list {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let recipe = registry.create(&args.recipe_name)?;
    let db = open_index(config).await?;

    let target = match &args.target {
        Some(id) => match db.get_item(id).await? {
            Some(item) => Some(item),
            None => bail!("Target item {id} is not in the index"),
        },
        None => None,
    };

    let scanner = RecipeScanner::new(&db);
    let results = scanner
        .scan_index(recipe.as_ref(), target.as_ref(), args.tab_index, !args.first)
        .await?;

    if args.positions {
        print!("{}", format_positions(&results));
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        println!("set {}:", i + 1);
        for item in &result.items {
            println!("  {:<16} {}", item.class.name(), item.summary());
        }
    }
    let totals = RewardTotals::from_results(&results);
    println!("{} results, currency: {}, items: {}", results.len(), format_totals(&totals), totals.items);
    Ok(())
}

fn apply_source_args(config: &mut Config, args: &SourceArgs) {
    if let Some(account) = &args.account_name {
        config.account_name = Some(account.clone());
    }
    if let Some(league) = &args.league {
        config.league = league.clone();
    }
    if let Some(session) = &args.poe_session_id {
        config.session_id = Some(session.clone());
    }
    if let Some(tab) = args.tab_index {
        config.tab_index = tab;
    }
}

fn build_client(config: &Config) -> Result<PoeClient> {
    PoeClient::new(config.session_id()?, config.stash_location()?, config.rate_limiter())
}

async fn ingest(mut config: Config, args: &SourceArgs) -> Result<()> {
    apply_source_args(&mut config, args);
    let client = build_client(&config)?;
    let db = open_index(&config).await?;

    let ingestor = Ingestor::new(&client, &db, config.tab_index);
    let report = ingestor.ingest_tab(&IndicatifProgress).await?;
    println!(
        "tab {}: {} fetched, {} indexed, {} skipped",
        config.tab_index, report.fetched, report.indexed, report.skipped
    );
    Ok(())
}

async fn server(mut config: Config, args: &ServerArgs) -> Result<()> {
    apply_source_args(&mut config, &args.source);
    if let Some(interval) = args.interval {
        config.poll_interval_secs = interval;
    }
    let client = build_client(&config)?;
    let db = open_index(&config).await?;

    let ingestor = Ingestor::new(&client, &db, config.tab_index);
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };
    run_server(&ingestor, config.poll_interval(), &NoopProgress, shutdown).await
}
