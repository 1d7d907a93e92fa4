//! IMA Client CLI
//!
//! Thin operational commands over the SDK:
//! - `ima connect`  - link two schains to each other and enable automatic
//!   clone deployment on both sides
//! - `ima status`   - report connection state between two schains

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ima_client::{keys, DeploymentRegistry, SchainChain, SubmissionOptions};

#[derive(Parser)]
#[command(name = "ima")]
#[command(about = "Operational CLI for the IMA token bridge", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Endpoint, name, deployment file, and signing key for one schain.
#[derive(clap::Args)]
struct SchainArgs {
    /// Schain JSON-RPC endpoint
    #[arg(long)]
    url: String,

    /// Registered schain name
    #[arg(long)]
    name: String,

    /// Path to the schain's deployment registry JSON
    #[arg(long)]
    abi: PathBuf,

    /// Private key of the schain owner account
    #[arg(long)]
    key: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect two schains to each other for schain-to-schain transfers
    Connect {
        #[command(flatten)]
        first: SchainArgs,

        #[command(flatten)]
        second: SchainArgsSecond,

        /// Skip enabling automatic clone deployment
        #[arg(long)]
        no_automatic_deploy: bool,
    },

    /// Show whether two schains are connected to each other
    Status {
        /// First schain JSON-RPC endpoint
        #[arg(long)]
        first_url: String,

        /// First schain deployment registry JSON
        #[arg(long)]
        first_abi: PathBuf,

        /// Second schain JSON-RPC endpoint
        #[arg(long)]
        second_url: String,

        /// Second schain deployment registry JSON
        #[arg(long)]
        second_abi: PathBuf,

        /// First schain name
        #[arg(long)]
        first_name: String,

        /// Second schain name
        #[arg(long)]
        second_name: String,
    },
}

/// Second schain's arguments, prefixed to avoid flag collisions.
#[derive(clap::Args)]
struct SchainArgsSecond {
    /// Second schain JSON-RPC endpoint
    #[arg(long = "second-url")]
    url: String,

    /// Second registered schain name
    #[arg(long = "second-name")]
    name: String,

    /// Path to the second schain's deployment registry JSON
    #[arg(long = "second-abi")]
    abi: PathBuf,

    /// Private key of the second schain owner account
    #[arg(long = "second-key")]
    key: String,
}

fn connect_schain(url: &str, name: &str, abi: &PathBuf) -> Result<SchainChain> {
    let registry = DeploymentRegistry::load(abi)?;
    Ok(SchainChain::new(url, name, &registry)?)
}

fn owner_options(key: &str) -> Result<SubmissionOptions> {
    let address = keys::derive_address(key)?;
    Ok(SubmissionOptions::with_key(format!("{address:#x}"), key))
}

/// Link `chain` to `peer_name` and enable automatic deploy on its managers.
async fn link_one_side(
    chain: &SchainChain,
    peer_name: &str,
    options: &SubmissionOptions,
    automatic_deploy: bool,
) -> Result<()> {
    if chain.linker.has_schain(peer_name).await? {
        tracing::info!(schain = %chain.name(), peer = %peer_name, "Already connected, skipping");
    } else {
        chain.linker.connect_schain(peer_name, options).await?;
        tracing::info!(schain = %chain.name(), peer = %peer_name, "Connected");
    }

    if automatic_deploy {
        if !chain.erc20.automatic_deploy().await? {
            chain.erc20.enable_automatic_deploy(options).await?;
        }
        if !chain.erc721.automatic_deploy().await? {
            chain.erc721.enable_automatic_deploy(options).await?;
        }
        if !chain.erc1155.automatic_deploy().await? {
            chain.erc1155.enable_automatic_deploy(options).await?;
        }
        tracing::info!(schain = %chain.name(), "Automatic clone deployment enabled");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Connect {
            first,
            second,
            no_automatic_deploy,
        } => {
            let first_chain = connect_schain(&first.url, &first.name, &first.abi)?;
            let second_chain = connect_schain(&second.url, &second.name, &second.abi)?;

            let first_options = owner_options(&first.key)?;
            let second_options = owner_options(&second.key)?;

            link_one_side(
                &first_chain,
                second_chain.name(),
                &first_options,
                !no_automatic_deploy,
            )
            .await?;
            link_one_side(
                &second_chain,
                first_chain.name(),
                &second_options,
                !no_automatic_deploy,
            )
            .await?;

            tracing::info!(
                first = %first_chain.name(),
                second = %second_chain.name(),
                "Schains connected in both directions"
            );
        }

        Commands::Status {
            first_url,
            first_abi,
            first_name,
            second_url,
            second_abi,
            second_name,
        } => {
            let first_registry = DeploymentRegistry::load(&first_abi)?;
            let second_registry = DeploymentRegistry::load(&second_abi)?;
            let first = SchainChain::new(&first_url, &first_name, &first_registry)?;
            let second = SchainChain::new(&second_url, &second_name, &second_registry)?;

            let forward = first.linker.has_schain(second.name()).await?;
            let backward = second.linker.has_schain(first.name()).await?;

            println!("{} -> {}: {}", first.name(), second.name(), forward);
            println!("{} -> {}: {}", second.name(), first.name(), backward);
        }
    }

    Ok(())
}
