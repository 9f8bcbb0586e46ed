// src/mongo.rs
use crate::config::ProbeConfig;
use crate::error::{ProbeError, Stage};
use crate::probe::{Connector, Session};
use async_trait::async_trait;
use bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::Client;
use std::time::Instant;
use tracing::{debug, info};

/// Connects with the official MongoDB driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct MongoConnector;

pub struct MongoSession {
    client: Option<Client>,
}

pub async fn connect(config: &ProbeConfig) -> Result<Client, ProbeError> {
    let mut client_options = ClientOptions::parse(&config.uri)
        .await
        .map_err(|e| ProbeError::from_driver(Stage::Connect, e))?;

    client_options.server_selection_timeout = Some(config.server_selection_timeout);
    if let Some(app_name) = &config.app_name {
        client_options.app_name = Some(app_name.clone());
    }

    debug!(
        hosts = ?client_options.hosts,
        server_selection_timeout_ms = config.server_selection_timeout.as_millis() as u64,
        "client options resolved"
    );

    Client::with_options(client_options).map_err(|e| ProbeError::from_driver(Stage::Connect, e))
}

#[async_trait]
impl Connector for MongoConnector {
    type Session = MongoSession;

    async fn connect(&self, config: &ProbeConfig) -> Result<MongoSession, ProbeError> {
        let client = connect(config).await?;
        Ok(MongoSession { client: Some(client) })
    }
}

impl MongoSession {
    fn client(&self) -> Result<&Client, ProbeError> {
        self.client
            .as_ref()
            .ok_or_else(|| ProbeError::Unreachable("connection already closed".to_string()))
    }
}

#[async_trait]
impl Session for MongoSession {
    async fn ping(&self) -> Result<(), ProbeError> {
        let started = Instant::now();
        self.client()?
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| ProbeError::from_driver(Stage::Ping, e))?;

        info!(latency_ms = started.elapsed().as_millis() as u64, "ping succeeded");
        Ok(())
    }

    async fn find_one(&self, database: &str, collection: &str) -> Result<Option<Document>, ProbeError> {
        self.client()?
            .database(database)
            .collection::<Document>(collection)
            .find_one(doc! {})
            .await
            .map_err(|e| ProbeError::from_driver(Stage::Find, e))
    }

    async fn close(&mut self) {
        if let Some(client) = self.client.take() {
            client.shutdown().await;
        }
    }
}
