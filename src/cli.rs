// src/cli.rs
use crate::config::ProbeConfig;
use clap::Parser;
use std::time::Duration;

/// Check that a MongoDB deployment is reachable and readable
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub uri: String,

    /// Database to read from
    #[arg(long, env = "MONGODB_DB", default_value = "scrooge")]
    pub db: String,

    /// Collection to read one document from
    #[arg(long, env = "MONGODB_COLLECTION", default_value = "collection_1")]
    pub collection: String,

    /// How long to wait for a reachable server before giving up
    #[arg(long, env = "MONGODB_SERVER_SELECTION_TIMEOUT_MS", default_value_t = 5000)]
    pub server_selection_timeout_ms: u64,

    /// Bound on the document read (unbounded when omitted)
    #[arg(long, env = "MONGODB_QUERY_TIMEOUT_MS")]
    pub query_timeout_ms: Option<u64>,

    /// Application name reported to the server
    #[arg(long, env = "MONGODB_APP_NAME")]
    pub app_name: Option<String>,

    /// Log connection details to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn config(&self) -> ProbeConfig {
        let mut config = ProbeConfig::new(&self.uri, &self.db, &self.collection)
            .with_server_selection_timeout(Duration::from_millis(self.server_selection_timeout_ms));

        if let Some(ms) = self.query_timeout_ms {
            config = config.with_query_timeout(Duration::from_millis(ms));
        }
        if let Some(name) = &self.app_name {
            config = config.with_app_name(name);
        }

        config
    }
}
