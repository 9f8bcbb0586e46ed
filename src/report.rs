// src/report.rs
use crate::error::ProbeError;
use bson::{Bson, Document};
use std::fmt::Display;
use std::io::Write;
use tracing::warn;

/// Prints probe status lines. A line that cannot be written is logged and
/// skipped; it never interrupts the probe.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn connected(&mut self) {
        self.line("✅ Connected to MongoDB!");
    }

    pub fn found(&mut self, doc: &Document) {
        self.line(format_args!("📄 Found a document: {}", render_document(doc)));
    }

    pub fn empty(&mut self) {
        self.line("⚠️ No documents found in collection.");
    }

    pub fn failed(&mut self, err: &ProbeError) {
        self.line(format_args!("❌ Connection failed: {}", err));
    }

    pub fn closed(&mut self) {
        self.line("🔌 Connection closed.");
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to write status line");
        }
    }
}

/// Relaxed extended JSON, the same shape `mongosh` prints. Falls back to the
/// plain BSON display form if the JSON cannot be serialized.
pub fn render_document(doc: &Document) -> String {
    let json = Bson::Document(doc.clone()).into_relaxed_extjson();
    match serde_json::to_string(&json) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "failed to render document as JSON");
            doc.to_string()
        }
    }
}
