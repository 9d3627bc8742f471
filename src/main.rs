use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::browse::BrowseSession;
use cli::commands::{Commands, SubmitArgs};
use cli::render;
use martech_hub::HubError;
use martech_hub::config::HubConfig;
use martech_hub::controller::{View, ViewController};
use martech_hub::domain::PriceFilter;
use martech_hub::submission::ToolDraft;

fn setup_logging(config: &HubConfig) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("martech-hub")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("martech-hub.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the configured level
    env_logger::Builder::new()
        .parse_filters(config.log_level.as_deref().unwrap_or("info"))
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Build a controller from config and load its catalog.
async fn start_controller(config: &HubConfig) -> Result<ViewController> {
    let store = config.build_store()?;
    let gateway = config.build_gateway()?;
    let mut controller = ViewController::new(store, gateway, config.category_set());
    controller.initialize().await;
    if let Some(reason) = controller.load_error() {
        eprintln!("{} {}", "Catalog unavailable:".red(), reason);
    }
    Ok(controller)
}

async fn run_application(cli: &Cli, config: &HubConfig) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None | Some(Commands::Browse) => handle_browse_command(config).await,
        Some(Commands::List {
            search,
            category,
            price,
        }) => handle_list_command(search.as_deref(), category.as_deref(), price, config).await,
        Some(Commands::Show { id }) => handle_show_command(*id, config).await,
        Some(Commands::Categories) => handle_categories_command(config),
        Some(Commands::Submit(args)) => handle_submit_command(args, config).await,
    }
}

async fn handle_browse_command(config: &HubConfig) -> Result<()> {
    info!("Launching browse session");
    println!("{}", "Loading catalog...".dimmed());
    let mut controller = start_controller(config).await?;
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    BrowseSession::new(stdin).run(&mut controller).await
}

async fn handle_list_command(
    search: Option<&str>,
    category: Option<&str>,
    price: &str,
    config: &HubConfig,
) -> Result<()> {
    info!("Listing tools - search: {:?}, category: {:?}, price: {}", search, category, price);
    let price: PriceFilter = price.parse()?;
    let category = category.map(|id| config.category_set().resolve(id)).transpose()?;

    let mut controller = start_controller(config).await?;
    controller.set_search_query(search.unwrap_or_default());
    controller.set_active_category(category);
    controller.set_active_price_filter(price);
    controller.navigate(View::Listing, None);

    print!("{}", render::render(&controller));
    Ok(())
}

async fn handle_show_command(id: u64, config: &HubConfig) -> Result<()> {
    info!("Showing tool: {}", id);
    let store = config.build_store()?;
    let tool = store
        .find_by_id(id)
        .await
        .context("Failed to fetch tool")?
        .ok_or(HubError::ToolNotFound(id))?;

    print!("{}", render::render_profile(&tool, &config.category_set()));
    Ok(())
}

fn handle_categories_command(config: &HubConfig) -> Result<()> {
    print!("{}", render::render_categories(&config.category_set()));
    Ok(())
}

fn draft_from_args(args: &SubmitArgs) -> ToolDraft {
    ToolDraft {
        name: args.name.clone(),
        category: args.category.clone(),
        short_pitch: args.pitch.clone(),
        description: args.description.clone(),
        pricing_model: args.pricing_model.clone(),
        pricing_starting_at: args.starting_at.clone(),
        contact_email: args.email.clone(),
        features: args.features.clone(),
        integrations: args.integrations.clone(),
        location: args.location.clone().unwrap_or_default(),
        website_url: args.website.clone().unwrap_or_default(),
        ..ToolDraft::default()
    }
}

async fn handle_submit_command(args: &SubmitArgs, config: &HubConfig) -> Result<()> {
    let draft = draft_from_args(args);
    info!("Submitting tool: {}", draft.name);

    let gateway = config.build_gateway()?;
    let mut controller = ViewController::new(config.build_store()?, gateway, config.category_set());
    controller.navigate(View::Submit, None);

    println!("{}", "PROCESSING...".dimmed());
    let result = controller.submit(&draft).await;
    print!("{}", render::render(&controller));
    result?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = HubConfig::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
