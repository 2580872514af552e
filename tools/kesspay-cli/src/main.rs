//! KessPay Command Line Tool
//!
//! Provides commands for working with WebPay gateway requests:
//! - validate: Validate a request JSON file
//! - canonicalize: Print the canonical string a signature is computed over
//! - sign: Sign a request file and print the signed JSON
//! - create-order: Create a preorder and print the payment link
//! - query-order: Check an order's payment status

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use kesspay_core::{
    validate_create_order, validate_query_order, CreateOrderRequest, QueryOrderRequest, Signable,
};
use kesspay_http::{GatewayConfig, WebPayClient};
use kesspay_sign::canonical_string;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kesspay")]
#[command(version)]
#[command(about = "KessPay WebPay tool - Validate, sign, and submit gateway requests")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a request JSON file
    #[command(about = "Validate a create-order or query-order JSON file")]
    Validate {
        /// Path to the JSON file to validate
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Treat the file as a query-order request (default is create-order)
        #[arg(long, short)]
        query: bool,
    },

    /// Print the canonical string for a request
    #[command(about = "Output the canonical string the signature is computed over")]
    Canonicalize {
        /// Path to the request JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// API secret key
        #[arg(long, short)]
        key: String,

        /// Treat the file as a query-order request (default is create-order)
        #[arg(long, short)]
        query: bool,
    },

    /// Sign a request file
    #[command(about = "Sign a request file and print the signed JSON")]
    Sign {
        /// Path to the request JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// API secret key
        #[arg(long, short)]
        key: String,

        /// Treat the file as a query-order request (default is create-order)
        #[arg(long, short)]
        query: bool,
    },

    /// Create a preorder on the gateway
    #[command(about = "Send a create-order request using KESSPAY_* environment config")]
    CreateOrder {
        /// Path to the unsigned create-order JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Query an order's payment status
    #[command(about = "Query order status using KESSPAY_* environment config")]
    QueryOrder {
        /// Merchant order id (out_trade_no)
        #[arg(value_name = "OUT_TRADE_NO")]
        out_trade_no: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kesspay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { file, query } => handle_validate(&file, query),
        Commands::Canonicalize { file, key, query } => handle_canonicalize(&file, &key, query),
        Commands::Sign { file, key, query } => handle_sign(&file, &key, query),
        Commands::CreateOrder { file } => handle_create_order(&file).await,
        Commands::QueryOrder { out_trade_no } => handle_query_order(&out_trade_no).await,
    }
}

fn read_create_order(file: &PathBuf) -> Result<CreateOrderRequest> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {} as create-order request", file.display()))
}

fn read_query_order(file: &PathBuf) -> Result<QueryOrderRequest> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {} as query-order request", file.display()))
}

fn handle_validate(file: &PathBuf, is_query: bool) -> Result<()> {
    if is_query {
        let query = read_query_order(file)?;
        validate_query_order(&query).with_context(|| "Request validation failed")?;
        println!("Valid query-order request");
    } else {
        let order = read_create_order(file)?;
        validate_create_order(&order).with_context(|| "Request validation failed")?;
        println!("Valid create-order request");
    }

    Ok(())
}

fn handle_canonicalize(file: &PathBuf, key: &str, is_query: bool) -> Result<()> {
    let canonical = if is_query {
        canonical_string(&read_query_order(file)?.sign_fields(), key)
    } else {
        canonical_string(&read_create_order(file)?.sign_fields(), key)
    }
    .with_context(|| "Failed to build canonical string")?;

    println!("{}", canonical);

    Ok(())
}

fn handle_sign(file: &PathBuf, key: &str, is_query: bool) -> Result<()> {
    let signed = if is_query {
        let mut query = read_query_order(file)?;
        kesspay_sign::sign(&mut query, key).with_context(|| "Failed to sign request")?;
        serde_json::to_string_pretty(&query)?
    } else {
        let mut order = read_create_order(file)?;
        kesspay_sign::sign(&mut order, key).with_context(|| "Failed to sign request")?;
        serde_json::to_string_pretty(&order)?
    };

    println!("{}", signed);

    Ok(())
}

async fn handle_create_order(file: &PathBuf) -> Result<()> {
    let order = read_create_order(file)?;

    let config = GatewayConfig::from_env().with_context(|| "Failed to load gateway config")?;
    let client = WebPayClient::new(config);

    let response = client
        .create_order(order)
        .await
        .with_context(|| "Gateway call failed")?;

    if !response.is_success() {
        bail!("Gateway rejected the order");
    }

    let data = response
        .data
        .with_context(|| "Gateway reported success without order data")?;

    println!(
        "Order created successfully: {}",
        data.payment_link.unwrap_or_default()
    );

    Ok(())
}

async fn handle_query_order(out_trade_no: &str) -> Result<()> {
    let config = GatewayConfig::from_env().with_context(|| "Failed to load gateway config")?;
    let client = WebPayClient::new(config);

    let response = client
        .query_order(out_trade_no)
        .await
        .with_context(|| "Gateway call failed")?;

    if !response.is_success() {
        bail!("Gateway rejected the query");
    }

    let data = response
        .data
        .with_context(|| "Gateway reported success without order data")?;

    println!("Order {}: {}", data.out_trade_no, data.status);

    Ok(())
}
