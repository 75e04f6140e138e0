use crate::config::constants::{DEFAULT_PROXY_HOST, DEFAULT_PROXY_PORT};
use clap::{ArgAction, Parser};

/// `-h` and `-v` are taken by `--host` and `--version`, so clap's built-in
/// short flags are disabled and re-added under the long names only.
#[derive(Parser, Debug)]
#[clap(name = "sonar-insights")]
#[clap(about = "Publish SonarQube quality gate results as Bitbucket Code Insights reports", long_about = None)]
#[clap(version, disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Bitbucket repository slug, e.g. workspace/repo
    #[clap(short = 'r', long)]
    pub reposlug: String,

    /// Commit SHA the report is attached to
    #[clap(short = 'c', long)]
    pub commit: String,

    /// Identifier of the Code Insights report
    #[clap(short = 'i', long = "reportId")]
    pub report_id: String,

    /// SonarQube project key
    #[clap(short = 'p', long = "projectName")]
    pub project_name: String,

    /// SonarQube base URL; falls back to sonar.host.url in sonar-project.properties
    #[clap(short = 'h', long)]
    pub host: Option<String>,

    /// SonarQube access token; falls back to sonar.login in sonar-project.properties
    #[clap(short = 't', long)]
    pub token: Option<String>,

    /// Local proxy host for Bitbucket API calls
    #[clap(long, default_value = DEFAULT_PROXY_HOST)]
    pub proxy_host: String,

    /// Local proxy port for Bitbucket API calls
    #[clap(long, default_value_t = DEFAULT_PROXY_PORT)]
    pub proxy_port: u16,

    #[clap(long, action = ArgAction::Help, help = "Print help")]
    help: Option<bool>,

    #[clap(short = 'v', long, action = ArgAction::Version, help = "Print version")]
    version: Option<bool>,
}
