/// Fully resolved configuration. Built once by the config resolver and
/// passed by reference into every component, read-only from then on.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub reposlug: String,
    pub commit: String,
    pub report_id: String,
    pub project_name: String,
    pub host: String,
    pub token: String,
    pub proxy: ProxySettings,
}

/// Local proxy the Bitbucket calls are routed through.
#[derive(Debug, Clone)]
pub struct ProxySettings {
    pub host: String,
    pub port: u16,
}

impl ProxySettings {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
