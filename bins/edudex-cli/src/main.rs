//! EduDex CLI - standalone example client
//!
//! Demonstrates the EduDex API client outside any framework: list
//! organizations and suppliers, inspect a single organization, and
//! validate a program document before submission.

use anyhow::Context;
use clap::{Parser, Subcommand};
use edudex_api_client::{ClientConfig, EduDexClient};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Standalone example CLI for the EduDex Data API
#[derive(Parser)]
#[command(name = "edudex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Bearer token (falls back to EDUDEX_API_TOKEN)
    #[arg(long, global = true, env = "EDUDEX_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// API base URL override
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List organizations
    Orgs {
        /// Preferred locale for names
        #[arg(short, long, default_value = "nl")]
        locale: String,
    },

    /// Show a single organization
    Org {
        /// Organization unit id
        org_unit_id: String,

        /// Preferred locale for names
        #[arg(short, long, default_value = "nl")]
        locale: String,
    },

    /// List suppliers
    Suppliers {
        /// Preferred locale for names
        #[arg(short, long, default_value = "nl")]
        locale: String,

        /// Limit the number of suppliers shown
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Validate a program JSON document
    Validate {
        /// Path to the program JSON file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "edudex_api_client=debug,edudex_cli=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ClientConfig::from_env();
    if let Some(token) = cli.token {
        config = config.with_bearer_token(token);
    }
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }

    let client = EduDexClient::with_config(config)
        .context("failed to initialize the EduDex client")?;

    match cli.command {
        Commands::Orgs { locale } => list_organizations(&client, &locale).await,
        Commands::Org { org_unit_id, locale } => show_organization(&client, &org_unit_id, &locale).await,
        Commands::Suppliers { locale, limit } => list_suppliers(&client, &locale, limit).await,
        Commands::Validate { file } => validate_program(&client, &file).await,
    }
}

async fn list_organizations(client: &EduDexClient, locale: &str) -> anyhow::Result<()> {
    let organizations = client.organizations().list().await?;
    println!(
        "{} {} organizations",
        "✓".green().bold(),
        organizations.len()
    );

    for org in &organizations {
        let name = org.localized_name(Some(locale)).unwrap_or("-");
        let id = org.id.as_deref().unwrap_or("-");
        println!(
            "  {} {} {}",
            id.cyan(),
            name,
            format!("[{}]", org.roles.join(", ")).dimmed()
        );
    }

    Ok(())
}

async fn show_organization(
    client: &EduDexClient,
    org_unit_id: &str,
    locale: &str,
) -> anyhow::Result<()> {
    let org = client.organizations().get(org_unit_id).await?;

    println!(
        "{}",
        org.localized_name(Some(locale)).unwrap_or(org_unit_id).bold()
    );
    println!("  id:            {}", org.id.as_deref().unwrap_or("-"));
    println!("  supplier:      {}", yes_no(org.is_supplier()));
    println!("  client:        {}", yes_no(org.is_client()));
    println!("  intermediary:  {}", yes_no(org.is_intermediary()));
    println!("  accreditor:    {}", yes_no(org.is_accreditor()));
    println!("  VAT exempt:    {}", yes_no(org.vat_exempt));

    if !org.accreditations.is_empty() {
        println!("  accreditations: {}", org.accreditations.join(", "));
    }

    Ok(())
}

async fn list_suppliers(client: &EduDexClient, locale: &str, limit: usize) -> anyhow::Result<()> {
    let suppliers = client.suppliers().list().await?;
    println!("{} {} suppliers", "✓".green().bold(), suppliers.len());

    for supplier in suppliers.iter().take(limit) {
        println!(
            "  {} {}",
            supplier.id.as_deref().unwrap_or("-").cyan(),
            supplier.localized_name(Some(locale)).unwrap_or("-")
        );
    }

    if suppliers.len() > limit {
        println!("  {} more not shown", suppliers.len() - limit);
    }

    Ok(())
}

async fn validate_program(client: &EduDexClient, file: &PathBuf) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let program: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let result = client.validations().validate_program(program).await?;

    for message in &result.messages {
        if message.is_error() {
            println!("  {message}", message = message.to_string().red());
        } else if message.is_warning() {
            println!("  {message}", message = message.to_string().yellow());
        } else {
            println!("  {message}");
        }
    }

    if result.is_valid() {
        println!(
            "{} valid ({} warnings)",
            "✓".green().bold(),
            result.warning_count()
        );
        Ok(())
    } else {
        anyhow::bail!("{} validation errors", result.error_count());
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
