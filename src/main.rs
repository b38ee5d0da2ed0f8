//! tfgen: render a Terraform template from the AWS default VPC

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tfgen::{aws::Ec2Client, config, generate};

#[derive(Parser, Debug)]
#[command(name = "tfgen")]
#[command(about = "Generate a Terraform template from your account's default VPC")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Query EC2 and write template.tf to the current directory
    #[command(visible_alias = "g")]
    Generate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Generate => {
            let ec2 = Ec2Client::new(config::REGION).await?;
            generate::run(&ec2, Path::new(".")).await?;
        }
    }

    Ok(())
}
