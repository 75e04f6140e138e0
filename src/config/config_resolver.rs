use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::constants::{PROPERTIES_FILE, PROPERTY_HOST_KEY, PROPERTY_TOKEN_KEY};
use crate::errors::{BridgeError, BridgeResult};
use crate::structs::cli::Cli;
use crate::structs::run_config::{ProxySettings, RunConfig};

pub struct ConfigResolver;

impl ConfigResolver {
    /// Merge CLI flags with `sonar-project.properties` from the working
    /// directory. Resolution happens entirely before any network call.
    pub fn resolve(cli: Cli) -> BridgeResult<RunConfig> {
        Self::resolve_with_properties(cli, Path::new(PROPERTIES_FILE))
    }

    pub fn resolve_with_properties(cli: Cli, properties_path: &Path) -> BridgeResult<RunConfig> {
        let (host, token) = Self::resolve_credentials(cli.host, cli.token, properties_path)?;

        Ok(RunConfig {
            reposlug: cli.reposlug,
            commit: cli.commit,
            report_id: cli.report_id,
            project_name: cli.project_name,
            host,
            token,
            proxy: ProxySettings {
                host: cli.proxy_host,
                port: cli.proxy_port,
            },
        })
    }

    fn resolve_credentials(
        host: Option<String>,
        token: Option<String>,
        properties_path: &Path,
    ) -> BridgeResult<(String, String)> {
        if let (Some(host), Some(token)) = (host.clone(), token.clone()) {
            return Ok((host, token));
        }

        if !properties_path.exists() {
            // No fallback source left, name the first missing field
            if host.is_none() {
                return Err(BridgeError::missing_configuration("host"));
            }
            return Err(BridgeError::missing_configuration("token"));
        }

        let content = fs::read_to_string(properties_path)?;
        let properties = Self::parse_properties(&content);

        let host = match host {
            Some(host) => host,
            None => properties
                .get(PROPERTY_HOST_KEY)
                .cloned()
                .ok_or_else(|| BridgeError::missing_property("host"))?,
        };
        let token = match token {
            Some(token) => token,
            None => properties
                .get(PROPERTY_TOKEN_KEY)
                .cloned()
                .ok_or_else(|| BridgeError::missing_property("token"))?,
        };

        Ok((host, token))
    }

    /// Line-oriented `key=value` table, split at the first `=` only.
    pub fn parse_properties(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }
}
