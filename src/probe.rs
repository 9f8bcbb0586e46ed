// src/probe.rs
//! The connectivity probe: connect, ping, read one document, report, and
//! release the connection on every path.

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::report::Reporter;
use async_trait::async_trait;
use bson::Document;
use std::io::Write;
use tracing::{debug, info};

/// Opens sessions against a database endpoint.
#[async_trait]
pub trait Connector {
    type Session: Session;

    async fn connect(&self, config: &ProbeConfig) -> Result<Self::Session, ProbeError>;
}

/// An established client connection.
#[async_trait]
pub trait Session: Send + Sync {
    /// Administrative liveness command.
    async fn ping(&self) -> Result<(), ProbeError>;

    /// Any one document of `database.collection`, if the collection has one.
    async fn find_one(&self, database: &str, collection: &str) -> Result<Option<Document>, ProbeError>;

    /// Releases the connection. Calling it again is a no-op.
    async fn close(&mut self);
}

#[derive(Debug)]
pub enum Outcome {
    Found(Document),
    Empty,
    Failed(ProbeError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed(_))
    }
}

/// Runs one probe. Never returns an error: failures end up in the report and
/// in `Outcome::Failed`. The closed line is printed exactly once.
pub async fn run<C, W>(connector: &C, config: &ProbeConfig, reporter: &mut Reporter<W>) -> Outcome
where
    C: Connector,
    W: Write,
{
    info!(uri = %config.redacted_uri(), "connecting");

    let mut session = None;
    let result = probe(connector, config, &mut session, reporter).await;

    if let Some(mut session) = session {
        session.close().await;
        debug!("session closed");
    }

    let outcome = match result {
        Ok(Some(doc)) => Outcome::Found(doc),
        Ok(None) => Outcome::Empty,
        Err(e) => {
            info!(error = %e, "probe failed");
            reporter.failed(&e);
            Outcome::Failed(e)
        }
    };

    reporter.closed();
    outcome
}

async fn probe<C, W>(
    connector: &C,
    config: &ProbeConfig,
    session: &mut Option<C::Session>,
    reporter: &mut Reporter<W>,
) -> Result<Option<Document>, ProbeError>
where
    C: Connector,
    W: Write,
{
    let session = session.insert(connector.connect(config).await?);

    session.ping().await?;
    reporter.connected();

    let read = session.find_one(&config.database, &config.collection);
    let doc = match config.query_timeout {
        Some(limit) => tokio::time::timeout(limit, read).await.map_err(|_| {
            ProbeError::Timeout(format!("document read exceeded {} ms", limit.as_millis()))
        })??,
        None => {
            debug!("document read has no timeout");
            read.await?
        }
    };

    info!(
        database = %config.database,
        collection = %config.collection,
        found = doc.is_some(),
        "document read finished"
    );
    match &doc {
        Some(doc) => reporter.found(doc),
        None => reporter.empty(),
    }
    Ok(doc)
}
