use crate::{
    config::{InitConfig, DEVELOPMENT_ENVIRONMENT},
    errors::InitError,
    initializer::{InitSummary, SchemaInitializer},
    report::{Banner, Reporter},
    seed, Args,
};
use clap::Parser;
use mongodb::{
    options::{ClientOptions, ServerAddress},
    Client as MongoDBClient,
};
use serial_test::serial;
use std::time::Duration;


const ENV_VARS: [&str; 3] = ["MONGO_INITDB_DATABASE", "NODE_ENV", "MONGO_URI"];

fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

fn parse_config(args: &[&str]) -> InitConfig {
    let argv = std::iter::once("nutriguide-db-init").chain(args.iter().copied());
    InitConfig::from_args(Args::try_parse_from(argv).expect("arguments should parse"))
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = parse_config(&[]);

    assert_eq!(config.database_name, "nutriguide_dev");
    assert_eq!(config.environment, DEVELOPMENT_ENVIRONMENT);
    assert_eq!(config.mongo_uri, "mongodb://127.0.0.1:27017");
    assert!(config.is_development());
}

#[test]
#[serial]
fn test_environment_variables_override_defaults() {
    clear_env();
    std::env::set_var("NODE_ENV", "production");
    std::env::set_var("MONGO_INITDB_DATABASE", "nutriguide_prod");
    let config = parse_config(&[]);
    clear_env();

    assert_eq!(config.database_name, "nutriguide_prod");
    assert_eq!(config.environment, "production");
    assert!(!config.is_development());
}

#[test]
#[serial]
fn test_blank_values_fall_back_to_defaults() {
    clear_env();
    let config = parse_config(&["--database", " ", "--environment", ""]);

    assert_eq!(config.database_name, "nutriguide_dev");
    assert!(config.is_development());
}

#[test]
#[serial]
fn test_environment_match_is_exact() {
    clear_env();
    for env in ["Development", "dev", "staging", "test"] {
        let config = parse_config(&["--environment", env]);
        assert!(!config.is_development(), "{env} must not seed");
    }
}

#[test]
fn test_sample_foods() {
    let foods = seed::sample_foods();
    assert_eq!(foods.len(), 1);

    let apple = &foods[0];
    assert_eq!(apple.name, "苹果");
    assert_eq!(apple.brand, "新鲜水果");
    assert_eq!(apple.category, "水果");
    assert_eq!(apple.nutrition.calories, 52.0);
    assert_eq!(apple.nutrition.fiber, 2.4);
    assert_eq!(apple.serving_size, "100g");
    assert_eq!(apple.tags, vec!["健康", "天然", "低卡路里"]);
    assert!(apple.is_verified);
    assert!(apple.created_at.is_some());
    assert!(apple._id.is_none());
    assert!(apple.barcode.is_none());
}

#[test]
fn test_reporter_writes_one_line_per_banner() {
    let mut reporter = Reporter::new(Vec::new());
    reporter.report(Banner::Start).unwrap();
    reporter.report(Banner::Environment("production")).unwrap();
    reporter.report(Banner::Database("nutriguide_dev")).unwrap();
    reporter.report(Banner::Complete).unwrap();

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("🚀"));
    assert!(lines[1].starts_with("📊") && lines[1].ends_with("production"));
    assert!(lines[2].starts_with("🗄️") && lines[2].ends_with("nutriguide_dev"));
    assert!(lines[3].starts_with("🎉"));
}

#[test]
fn test_summary_display() {
    let summary = InitSummary {
        database: "nutriguide_dev".to_string(),
        collections: vec![("users".to_string(), 5), ("foods".to_string(), 7)],
        seeded: 1,
    };
    assert_eq!(
        summary.to_string(),
        "database nutriguide_dev: users (5 indices) foods (7 indices); 1 seed documents"
    );
}

#[tokio::test]
async fn test_unreachable_server_aborts_before_any_collection() {
    // nothing listens on port 1
    let client_options = ClientOptions::builder()
        .hosts(vec![ServerAddress::Tcp {
            host: "127.0.0.1".to_string(),
            port: Some(1),
        }])
        .server_selection_timeout(Some(Duration::from_millis(200)))
        .build();
    let client = MongoDBClient::with_options(client_options).unwrap();
    let config = InitConfig {
        database_name: "nutriguide_dev".to_string(),
        environment: DEVELOPMENT_ENVIRONMENT.to_string(),
        mongo_uri: "mongodb://127.0.0.1:1".to_string(),
    };

    let mut initializer = SchemaInitializer::new(client, config, Vec::new());
    let err = initializer.run().await.expect_err("run must fail");
    assert!(matches!(err, InitError::Database(_)), "unexpected error: {err}");

    let output = String::from_utf8(initializer.into_output()).unwrap();
    assert!(output.contains("🗄️  Target database: nutriguide_dev"));
    assert!(!output.contains("📝"), "no collection work after a failed selection");
    assert!(!output.contains("🎉"));
}
