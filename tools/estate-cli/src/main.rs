//! Command-line front end for the property showcase.
//!
//! Browses the built-in catalog, runs filters, quotes monthly installments and
//! plays the rotating carousel in the terminal. `--json` switches every command
//! to machine-readable output.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use estate_common::autoplay::LiveShowcase;
use estate_common::config::ShowcaseConfig;
use estate_common::currency::{format_inr_f64, parse_amount_input};
use estate_common::filter::FilterSpec;
use estate_common::financing::{self, FinancingQuote, LoanTerm};
use estate_common::listing::{Listing, ListingId, ListingStatus, TransactionType};
use estate_common::showcase::Showcase;

#[derive(Parser)]
#[command(name = "estate", about = "Browse, filter and finance property listings")]
struct Cli {
    /// JSON config file overriding the showcase defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every listing in catalog order.
    List,

    /// List the listings matching every given criterion.
    Filter {
        /// Status label, e.g. "Completed" or "In Progress".
        #[arg(long)]
        status: Option<String>,

        /// Case-insensitive part of the location.
        #[arg(long)]
        location: Option<String>,

        /// Lowest price in rupees (inclusive).
        #[arg(long)]
        min: Option<String>,

        /// Highest price in rupees (inclusive).
        #[arg(long)]
        max: Option<String>,

        /// Required feature; repeat for several.
        #[arg(long = "feature")]
        features: Vec<String>,

        #[arg(long)]
        property_type: Option<String>,

        #[arg(long)]
        bedrooms: Option<u8>,

        /// "sale" or "rent".
        #[arg(long)]
        transaction: Option<String>,
    },

    /// Quote the monthly installment for a listing or a raw price.
    Quote {
        /// Listing id, e.g. 3.
        #[arg(long, conflicts_with = "price", required_unless_present = "price")]
        listing: Option<u64>,

        /// Price in rupees.
        #[arg(long)]
        price: Option<String>,

        /// Loan term in years: 10, 20 or 30. Defaults to the configured term.
        #[arg(long)]
        term: Option<u32>,
    },

    /// Play the rotating carousel for a number of autoplay ticks.
    Tour {
        /// Viewport width in pixels.
        #[arg(long, default_value_t = 800)]
        width: u32,

        /// Number of autoplay ticks to watch.
        #[arg(long, default_value_t = 6)]
        ticks: u32,

        /// Override the configured autoplay interval.
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval_ms: Option<u64>,
    },
}

#[derive(Serialize)]
struct ListingRow<'a> {
    id: u64,
    title: &'a str,
    location: &'a str,
    price: &'a str,
    status: String,
}

impl<'a> From<&'a Listing> for ListingRow<'a> {
    fn from(listing: &'a Listing) -> Self {
        Self {
            id: listing.id.0,
            title: &listing.title,
            location: &listing.location,
            price: &listing.price,
            status: listing.display_status().label().to_string(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ShowcaseConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ShowcaseConfig::default(),
    };
    debug!(?config, "configuration resolved");

    match cli.command {
        Command::List => {
            let showcase = Showcase::new(config);
            print_listings(showcase.visible_listings(), cli.json)
        }
        Command::Filter {
            status,
            location,
            min,
            max,
            features,
            property_type,
            bedrooms,
            transaction,
        } => {
            let mut spec = FilterSpec::new();
            spec.status = status.as_deref().map(ListingStatus::from_label);
            if let Some(location) = location {
                spec = spec.with_location(location);
            }
            if let Some(min) = min {
                spec.set_min_price_input(&min)?;
            }
            if let Some(max) = max {
                spec.set_max_price_input(&max)?;
            }
            for feature in features {
                spec = spec.with_feature(feature);
            }
            spec.property_type = property_type;
            spec.bedrooms = bedrooms;
            spec.transaction_type = transaction.as_deref().map(parse_transaction).transpose()?;

            let mut showcase = Showcase::new(config);
            showcase.set_filter_spec(spec);
            info!(matches = showcase.visible_listings().len(), "filter applied");
            print_listings(showcase.visible_listings(), cli.json)
        }
        Command::Quote {
            listing,
            price,
            term,
        } => {
            let term = match term {
                Some(years) => LoanTerm::try_from(years).map_err(|e| anyhow!(e))?,
                None => config.default_term,
            };
            let quote = match (listing, price) {
                (Some(id), _) => Showcase::new(config).quote(ListingId(id), term)?,
                (None, Some(price)) => {
                    let price = parse_amount_input(&price)
                        .ok_or_else(|| anyhow!("{price:?} is not a whole rupee amount"))?;
                    let terms = config.financing_terms();
                    financing::quote(
                        price as f64,
                        terms.down_payment_ratio,
                        terms.annual_rate_percent,
                        term.years(),
                    )
                }
                (None, None) => bail!("either --listing or --price is required"),
            };
            print_quote(&quote, cli.json)
        }
        Command::Tour {
            width,
            ticks,
            interval_ms,
        } => {
            let period = interval_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.autoplay_interval());
            run_tour(Showcase::new(config), width, ticks, period, cli.json).await
        }
    }
}

fn parse_transaction(raw: &str) -> Result<TransactionType> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "sale" | "buy" => Ok(TransactionType::Sale),
        "rent" => Ok(TransactionType::Rent),
        other => bail!("unknown transaction type {other:?} (expected sale or rent)"),
    }
}

fn print_listings(listings: &[Listing], json: bool) -> Result<()> {
    if json {
        let rows: Vec<ListingRow<'_>> = listings.iter().map(ListingRow::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    if listings.is_empty() {
        println!("No properties match the selected filters.");
        return Ok(());
    }
    for l in listings {
        println!(
            "{:>9}  {:<20} {:<22} {:>12}  {}",
            l.id.to_string(),
            l.title,
            l.location,
            l.price,
            l.display_status()
        );
    }
    Ok(())
}

fn print_quote(quote: &FinancingQuote, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(quote)?);
        return Ok(());
    }
    println!("Total price:     {}", format_inr_f64(quote.total_price));
    println!("Down payment:    {}", format_inr_f64(quote.down_payment));
    println!("Loan amount:     {}", format_inr_f64(quote.loan_amount));
    println!("Term:            {} months", quote.term_months);
    println!("Monthly EMI:     {}", format_inr_f64(quote.monthly_installment));
    println!("Total interest:  {}", format_inr_f64(quote.total_interest()));
    Ok(())
}

async fn run_tour(
    mut showcase: Showcase,
    width: u32,
    ticks: u32,
    period: Duration,
    json: bool,
) -> Result<()> {
    showcase.on_viewport_change(width);
    let mut live = LiveShowcase::with_period(showcase, period)
        .context("--interval-ms must be positive")?;
    if !live.is_timer_running() {
        info!(width, "autoplay inactive at this width; showing the full row");
    }

    // Sample halfway between ticks so each sample sees exactly one advance.
    tokio::time::sleep(period / 2).await;
    for tick in 0..=ticks {
        let (state, title) = live
            .read(|s| (s.carousel_state(), s.current_listing().map(|l| l.title.clone())))
            .await;
        if json {
            println!(
                "{}",
                serde_json::json!({ "tick": tick, "state": state, "current": title })
            );
        } else {
            println!(
                "[{tick:>3}] card {}/{}  {}",
                state.index + 1,
                state.filtered_count,
                title.as_deref().unwrap_or("-")
            );
        }
        if tick < ticks {
            tokio::time::sleep(period).await;
        }
    }

    live.shutdown().await;
    Ok(())
}
