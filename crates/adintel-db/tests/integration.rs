//! Offline unit tests for adintel-db pool configuration and row types.
//! These tests do not require a live database connection.

use adintel_core::{AppConfig, Environment};
use adintel_db::{AdListFilters, AdRow, BriefStatsRow, PoolConfig};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        catalog_path: PathBuf::from("./config/catalog.yaml"),
        brief_api_key: None,
        brief_base_url: "https://api.anthropic.com".to_string(),
        brief_model: "claude-sonnet-4-6".to_string(),
        brief_max_tokens: 1200,
        brief_timeout_secs: 60,
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[test]
fn ad_list_filters_default_to_match_everything() {
    let filters = AdListFilters::default();
    assert!(filters.brand.is_none());
    assert!(filters.competitor_name.is_none());
    assert!(filters.message_theme.is_none());
    assert!(filters.emotional_tone.is_none());
    assert!(filters.ad_format.is_none());
    assert!(filters.is_active.is_none());
    assert_eq!(filters.offset, 0);
}

/// Compile-time smoke test: confirm that [`AdRow`] has all expected fields
/// with the correct types. No database required.
#[test]
fn ad_row_has_expected_fields() {
    use chrono::NaiveDate;
    use uuid::Uuid;

    let row = AdRow {
        id: Uuid::new_v4(),
        ad_id: "mock_0123456789abcdef".to_string(),
        competitor_name: "OZiva".to_string(),
        competitor_page_id: "101234567890001".to_string(),
        brand: "bebodywise".to_string(),
        vertical: "women_wellness".to_string(),
        ad_format: "carousel".to_string(),
        message_theme: "weight".to_string(),
        emotional_tone: "aspiration".to_string(),
        headline: "Your Best Self Awaits".to_string(),
        body_text: "Start today.".to_string(),
        cta: "Shop Now".to_string(),
        platform: "facebook,instagram".to_string(),
        estimated_spend_min: 3_000,
        estimated_spend_max: 3_600,
        start_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        end_date: None,
        is_active: true,
        days_running: 57,
        num_cards: Some(4),
        country: "IN".to_string(),
        source: "mock".to_string(),
    };

    assert!(row.ad_id.starts_with("mock_"));
    assert_eq!(row.is_active, row.end_date.is_none());
    assert!(row.estimated_spend_max >= row.estimated_spend_min);
    assert_eq!(row.num_cards, Some(4));
}

/// Compile-time smoke test for the brief stats aggregate row.
#[test]
fn brief_stats_row_has_expected_fields() {
    let row = BriefStatsRow {
        total_ads: 60,
        active_ads: 41,
        competitor_count: 5,
        avg_days_running: 31.4,
        total_spend_min: 500_000,
        total_spend_max: 620_000,
        longest_running_days: 88,
        top_spender: Some("HealthKart".to_string()),
    };

    assert!(row.active_ads <= row.total_ads);
    assert!(row.total_spend_max >= row.total_spend_min);
    assert_eq!(row.top_spender.as_deref(), Some("HealthKart"));
}
