use clap::Parser;

use crate::adapters::bitbucket_adapter::BitbucketAdapter;
use crate::adapters::sonar_adapter::SonarAdapter;
use crate::config::config_resolver::ConfigResolver;
use crate::errors::BridgeResult;
use crate::structs::cli::Cli;
use crate::workers::pipeline_runner::PipelineRunner;

mod adapters;
mod config;
mod enums;
mod errors;
mod services;
mod structs;
mod traits;
mod workers;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> BridgeResult<()> {
    let config = ConfigResolver::resolve(cli)?;

    let sonar = SonarAdapter::new(&config.host, &config.token)?;
    let bitbucket = BitbucketAdapter::new(&config)?;

    PipelineRunner::run(&config, &sonar, &bitbucket).await
}
