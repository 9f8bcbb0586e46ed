//! Runs against a real deployment named by `MONGODB_URI`.
//! `cargo test -- --ignored` to include them.

use bson::doc;
use mongo_probe::config::ProbeConfig;
use mongo_probe::mongo::connect;
use mongo_probe::mongo::MongoConnector;
use mongo_probe::probe::{self, Outcome};
use mongo_probe::report::Reporter;
use std::time::Duration;

const DATABASE: &str = "mongo_probe_test";

fn config(collection: &str) -> ProbeConfig {
    let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    ProbeConfig::new(uri, DATABASE, collection).with_server_selection_timeout(Duration::from_secs(2))
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_probe_finds_seeded_document() {
    let config = config("probe_seeded");
    let client = connect(&config).await.unwrap();
    let collection = client.database(DATABASE).collection::<bson::Document>("probe_seeded");
    collection.delete_many(doc! {}).await.unwrap();
    collection.insert_one(doc! { "kind": "seed" }).await.unwrap();

    let mut reporter = Reporter::new(Vec::new());
    let outcome = probe::run(&MongoConnector, &config, &mut reporter).await;

    assert!(matches!(outcome, Outcome::Found(ref d) if d.get_str("kind").ok() == Some("seed")));
    let text = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(text.starts_with("✅ Connected to MongoDB!\n📄 Found a document: "));
    assert!(text.ends_with("🔌 Connection closed.\n"));

    collection.drop().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_probe_empty_collection() {
    let config = config("probe_empty");
    let client = connect(&config).await.unwrap();
    client
        .database(DATABASE)
        .collection::<bson::Document>("probe_empty")
        .drop()
        .await
        .unwrap();

    let mut reporter = Reporter::new(Vec::new());
    let outcome = probe::run(&MongoConnector, &config, &mut reporter).await;

    assert!(matches!(outcome, Outcome::Empty));
    let text = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(
        text,
        "✅ Connected to MongoDB!\n⚠️ No documents found in collection.\n🔌 Connection closed.\n"
    );
}
