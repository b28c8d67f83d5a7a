//! # adgram-cli
//!
//! Binary entry point for the Adgram marketplace client.
//!
//! This crate provides:
//! - CLI argument parsing using `clap`
//! - The interactive deals view via `adgram watch`
//! - One-shot snapshots via `adgram deals`
//! - Guarded state transitions via `adgram transition`
//! - Collaborator glue: auth, channel, campaign, and deal creation

mod display;
mod host;

use adgram_client::{MarketClient, MarketConfig, NewCampaign, NewChannel, NewDeal};
use adgram_core::SyncEngine;
use adgram_proto::{DealApi, DealFilter, TransitionOutcome};
use adgram_tui::App;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "adgram", version, about = "Telegram ad-marketplace client")]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "ADGRAM_API_URL")]
    api_url: String,

    /// Telegram identity used for guarded requests
    #[arg(long, env = "ADGRAM_TELEGRAM_ID")]
    telegram_id: i64,

    /// Reconciliation poll period in milliseconds
    #[arg(long, env = "ADGRAM_POLL_INTERVAL_MS", default_value_t = 30_000)]
    poll_interval_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive deals view (polls while open)
    Watch,
    /// Print a one-shot snapshot of the deals view
    Deals {
        /// Only show deals of this category (e.g. placement, review)
        #[arg(long)]
        filter: Option<String>,
        /// Emit the render instructions as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Request a state transition for one deal
    Transition {
        deal_id: i64,
        target_state: String,
    },
    /// Register or browse marketplace channels
    #[command(subcommand)]
    Channels(ChannelsCommand),
    /// Create an advertising campaign
    Campaign {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        text: String,
        #[arg(long, default_value_t = 0.0)]
        budget: f64,
    },
    /// Open a deal between a campaign and a channel
    Deal {
        #[arg(long)]
        campaign_id: Option<i64>,
        #[arg(long)]
        channel_id: i64,
        #[arg(long, default_value_t = 0.0)]
        amount: f64,
    },
    /// Register the configured telegram identity with the backend
    Auth,
}

#[derive(Subcommand)]
enum ChannelsCommand {
    /// List marketplace channels
    List,
    /// Register a channel
    Add {
        #[arg(long)]
        username: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "general")]
        category: String,
        #[arg(long, default_value_t = 0.0)]
        price: f64,
        #[arg(long, default_value_t = 0)]
        subscribers: i64,
        #[arg(long, default_value_t = 0)]
        views: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = MarketConfig::new(cli.api_url.clone(), cli.telegram_id);
    config.poll_interval_ms = cli.poll_interval_ms;
    let client = MarketClient::new(config).context("failed to build marketplace client")?;

    match cli.command {
        Command::Watch => watch(client, cli.poll_interval_ms).await,
        Command::Deals { filter, json } => deals(client, filter, json).await,
        Command::Transition {
            deal_id,
            target_state,
        } => transition(client, deal_id, &target_state).await,
        Command::Channels(cmd) => channels(client, cmd).await,
        Command::Campaign { title, text, budget } => {
            campaign(client, title, text, budget, cli.telegram_id).await
        }
        Command::Deal {
            campaign_id,
            channel_id,
            amount,
        } => create_deal(client, campaign_id, channel_id, amount).await,
        Command::Auth => auth(client).await,
    }
}

async fn watch(client: MarketClient, poll_interval_ms: u64) -> Result<()> {
    let engine = Arc::new(SyncEngine::new(Arc::new(client) as Arc<dyn DealApi>));
    App::new(engine, Duration::from_millis(poll_interval_ms))
        .run()
        .await
}

async fn deals(client: MarketClient, filter: Option<String>, json: bool) -> Result<()> {
    let deals = client.fetch_deals().await?;
    let filter = match filter {
        Some(kind) => DealFilter::Kind(kind),
        None => DealFilter::All,
    };
    let view = adgram_core::render_deals(&deals, &filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        display::print_view(&view);
    }
    Ok(())
}

async fn transition(client: MarketClient, deal_id: i64, target_state: &str) -> Result<()> {
    match client.request_transition(deal_id, target_state).await? {
        TransitionOutcome::Applied { description } => {
            let text = description.unwrap_or_else(|| "applied".to_string());
            println!("{} deal {deal_id}: {text}", "✓".green());
            Ok(())
        }
        TransitionOutcome::Rejected { message } => {
            println!("{} {message}", "✗".red());
            std::process::exit(1);
        }
    }
}

async fn channels(client: MarketClient, cmd: ChannelsCommand) -> Result<()> {
    match cmd {
        ChannelsCommand::List => {
            for channel in client.list_channels().await? {
                println!(
                    "{:<20} {:<24} {:>8} subs  {:>8} views  {:>8} TON",
                    channel.handle.bold(),
                    channel.name.unwrap_or_default(),
                    channel.subscribers,
                    channel.views,
                    channel.price,
                );
            }
            Ok(())
        }
        ChannelsCommand::Add {
            username,
            name,
            category,
            price,
            subscribers,
            views,
        } => {
            let user_id = client.config().telegram_id;
            let channel = client
                .register_channel(&NewChannel {
                    username,
                    name,
                    category,
                    price,
                    subscribers,
                    avg_views: views,
                    user_id,
                })
                .await?;
            println!("{} registered channel {}", "✓".green(), channel.handle.bold());
            host::emit("channel_registered", serde_json::json!({ "id": channel.id }));
            Ok(())
        }
    }
}

async fn campaign(
    client: MarketClient,
    title: String,
    text: String,
    budget: f64,
    user_id: i64,
) -> Result<()> {
    let campaign = client
        .create_campaign(&NewCampaign {
            title,
            text,
            budget,
            user_id,
        })
        .await?;
    println!(
        "{} created campaign {} ({})",
        "✓".green(),
        campaign.title.bold(),
        campaign.id
    );
    host::emit("campaign_created", serde_json::json!({ "id": campaign.id }));
    Ok(())
}

async fn create_deal(
    client: MarketClient,
    campaign_id: Option<i64>,
    channel_id: i64,
    amount: f64,
) -> Result<()> {
    let deal = client
        .create_deal(&NewDeal {
            campaign_id,
            channel_id,
            escrow_amount: amount,
        })
        .await?;
    println!("{} opened deal {} ({})", "✓".green(), deal.id, deal.status);
    host::emit("deal_created", serde_json::json!({ "id": deal.id }));
    Ok(())
}

async fn auth(client: MarketClient) -> Result<()> {
    let user = client.auth().await?;
    println!(
        "{} authenticated as telegram id {} (user {})",
        "✓".green(),
        user.telegram_id,
        user.id
    );
    Ok(())
}
