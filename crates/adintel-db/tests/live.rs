//! Live integration tests for adintel-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/adintel-db/`), so `"../../migrations"` resolves to the workspace
//! migration directory.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use adintel_core::catalog::{BrandEntry, Catalog, CompetitorEntry};
use adintel_db::{
    brief_stats, competitor_summaries, count_ads, delete_synthetic_ads,
    format_distribution, insert_brief, latest_brief, list_ads, longest_running_ads,
    longevity_distribution, theme_distribution, tone_distribution, top_spenders, upsert_ads,
    weekly_spend, AdListFilters, DbError,
};
use adintel_synth::{AdRecord, Generator};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn two_brand_catalog() -> Catalog {
    Catalog {
        brands: vec![
            BrandEntry {
                key: "bebodywise".to_string(),
                label: "Be Bodywise".to_string(),
                vertical: "women_wellness".to_string(),
                themes: vec!["weight".to_string(), "immunity".to_string()],
                competitors: vec![
                    CompetitorEntry {
                        name: "OZiva".to_string(),
                        page_id: "101234567890001".to_string(),
                        country: "IN".to_string(),
                    },
                    CompetitorEntry {
                        name: "Kapiva".to_string(),
                        page_id: "101234567890002".to_string(),
                        country: "IN".to_string(),
                    },
                ],
            },
            BrandEntry {
                key: "man_matters".to_string(),
                label: "Man Matters".to_string(),
                vertical: "mens_wellness".to_string(),
                themes: vec!["hair_loss".to_string(), "energy".to_string()],
                competitors: vec![CompetitorEntry {
                    name: "Traya".to_string(),
                    page_id: "101234567890003".to_string(),
                    country: "IN".to_string(),
                }],
            },
        ],
    }
}

fn seeded_batch(seed: u64) -> Vec<AdRecord> {
    let catalog = two_brand_catalog();
    let generator = Generator::new(&catalog).expect("generator from valid catalog");
    let mut rng = StdRng::seed_from_u64(seed);
    generator.batch(Utc::now().date_naive(), &mut rng)
}

/// Insert one non-synthetic row directly, bypassing the generator.
async fn insert_external_ad(pool: &sqlx::PgPool, ad_id: &str) {
    sqlx::query(
        "INSERT INTO competitor_ads ( \
             id, ad_id, competitor_name, competitor_page_id, brand, vertical, \
             ad_format, message_theme, emotional_tone, headline, body_text, cta, \
             platform, estimated_spend_min, estimated_spend_max, start_date, \
             end_date, is_active, days_running, num_cards, country, source) \
         VALUES (gen_random_uuid(), $1, 'OZiva', '101234567890001', 'bebodywise', \
                 'women_wellness', 'static', 'weight', 'trust', 'Real Ad', \
                 'Observed from the ad library.', 'Shop Now', 'facebook', \
                 1000, 1200, CURRENT_DATE - 10, NULL, TRUE, 10, NULL, 'IN', 'meta')",
    )
    .bind(ad_id)
    .execute(pool)
    .await
    .expect("insert external ad");
}

// ---------------------------------------------------------------------------
// Section 1: Seeding writes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn upsert_then_list_round_trips_a_batch(pool: sqlx::PgPool) {
    let batch = seeded_batch(1);
    let written = upsert_ads(&pool, &batch).await.expect("upsert_ads failed");
    assert_eq!(written, batch.len());

    let total = count_ads(&pool, false).await.expect("count_ads failed");
    assert_eq!(total, i64::try_from(batch.len()).unwrap());

    let rows = list_ads(
        &pool,
        AdListFilters {
            limit: 500,
            ..AdListFilters::default()
        },
    )
    .await
    .expect("list_ads failed");
    assert_eq!(rows.len(), batch.len());

    // Newest launch first.
    for pair in rows.windows(2) {
        assert!(pair[0].start_date >= pair[1].start_date);
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn upsert_is_idempotent_and_updates_on_conflict(pool: sqlx::PgPool) {
    let mut batch = seeded_batch(2);
    upsert_ads(&pool, &batch).await.expect("first upsert");

    batch[0].headline = "Updated Headline".to_string();
    upsert_ads(&pool, &batch).await.expect("second upsert");

    let total = count_ads(&pool, false).await.expect("count");
    assert_eq!(total, i64::try_from(batch.len()).unwrap());

    let rows = list_ads(
        &pool,
        AdListFilters {
            limit: 500,
            ..AdListFilters::default()
        },
    )
    .await
    .expect("list");
    let updated = rows
        .iter()
        .find(|r| r.ad_id == batch[0].ad_id)
        .expect("updated row present");
    assert_eq!(updated.headline, "Updated Headline");
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_synthetic_spares_externally_sourced_rows(pool: sqlx::PgPool) {
    let batch = seeded_batch(3);
    upsert_ads(&pool, &batch).await.expect("upsert");
    insert_external_ad(&pool, "meta_0001").await;

    let removed = delete_synthetic_ads(&pool).await.expect("delete");
    assert_eq!(removed, u64::try_from(batch.len()).unwrap());

    let remaining = list_ads(
        &pool,
        AdListFilters {
            limit: 10,
            ..AdListFilters::default()
        },
    )
    .await
    .expect("list");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].source, "meta");
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_filters_compose(pool: sqlx::PgPool) {
    let batch = seeded_batch(4);
    upsert_ads(&pool, &batch).await.expect("upsert");

    let brand_rows = list_ads(
        &pool,
        AdListFilters {
            brand: Some("man_matters"),
            limit: 500,
            ..AdListFilters::default()
        },
    )
    .await
    .expect("brand filter");
    assert!(!brand_rows.is_empty());
    assert!(brand_rows.iter().all(|r| r.brand == "man_matters"));
    assert!(brand_rows.iter().all(|r| r.competitor_name == "Traya"));

    let active_rows = list_ads(
        &pool,
        AdListFilters {
            is_active: Some(true),
            limit: 500,
            ..AdListFilters::default()
        },
    )
    .await
    .expect("active filter");
    assert!(active_rows.iter().all(|r| r.is_active && r.end_date.is_none()));

    let carousel_rows = list_ads(
        &pool,
        AdListFilters {
            ad_format: Some("carousel"),
            limit: 500,
            ..AdListFilters::default()
        },
    )
    .await
    .expect("format filter");
    assert!(carousel_rows.iter().all(|r| r.num_cards.is_some()));
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_pagination_windows_do_not_overlap(pool: sqlx::PgPool) {
    let batch = seeded_batch(5);
    upsert_ads(&pool, &batch).await.expect("upsert");

    let first = list_ads(
        &pool,
        AdListFilters {
            limit: 5,
            offset: 0,
            ..AdListFilters::default()
        },
    )
    .await
    .expect("page 1");
    let second = list_ads(
        &pool,
        AdListFilters {
            limit: 5,
            offset: 5,
            ..AdListFilters::default()
        },
    )
    .await
    .expect("page 2");

    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 5);
    for row in &second {
        assert!(first.iter().all(|r| r.ad_id != row.ad_id));
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn count_ads_can_restrict_to_active(pool: sqlx::PgPool) {
    let batch = seeded_batch(6);
    upsert_ads(&pool, &batch).await.expect("upsert");

    let all = count_ads(&pool, false).await.expect("all");
    let active = count_ads(&pool, true).await.expect("active");
    let expected_active = batch.iter().filter(|r| r.is_active).count();
    assert_eq!(active, i64::try_from(expected_active).unwrap());
    assert!(active <= all);
}

// ---------------------------------------------------------------------------
// Section 2: Analytics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn competitor_summaries_aggregate_per_competitor(pool: sqlx::PgPool) {
    let batch = seeded_batch(7);
    upsert_ads(&pool, &batch).await.expect("upsert");

    let summaries = competitor_summaries(&pool, None).await.expect("summaries");
    assert_eq!(summaries.len(), 3);

    for pair in summaries.windows(2) {
        assert!(pair[0].total_spend_max >= pair[1].total_spend_max);
    }

    let oziva = summaries
        .iter()
        .find(|s| s.competitor_name == "OZiva")
        .expect("OZiva summary");
    let expected: i64 = batch
        .iter()
        .filter(|r| r.competitor_name == "OZiva")
        .count()
        .try_into()
        .unwrap();
    assert_eq!(oziva.total_ads, expected);
    assert!(oziva.active_ads <= oziva.total_ads);
    assert!(oziva.top_theme.is_some());
    assert!(oziva.total_spend_max >= oziva.total_spend_min);

    let scoped = competitor_summaries(&pool, Some("man_matters"))
        .await
        .expect("scoped summaries");
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].competitor_name, "Traya");
}

#[sqlx::test(migrations = "../../migrations")]
async fn weekly_spend_totals_match_the_corpus(pool: sqlx::PgPool) {
    let batch = seeded_batch(8);
    upsert_ads(&pool, &batch).await.expect("upsert");

    let weeks = weekly_spend(&pool, None).await.expect("weekly spend");
    assert!(!weeks.is_empty());

    let week_total: i64 = weeks.iter().map(|w| w.total_spend_max).sum();
    let corpus_total: i64 = batch.iter().map(|r| r.estimated_spend_max).sum();
    assert_eq!(week_total, corpus_total);

    let ad_total: i64 = weeks.iter().map(|w| w.ad_count).sum();
    assert_eq!(ad_total, i64::try_from(batch.len()).unwrap());

    for pair in weeks.windows(2) {
        assert!(pair[0].week_start < pair[1].week_start);
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn distributions_cover_the_corpus_and_sum_to_one(pool: sqlx::PgPool) {
    let batch = seeded_batch(9);
    upsert_ads(&pool, &batch).await.expect("upsert");

    for rows in [
        theme_distribution(&pool, None).await.expect("themes"),
        format_distribution(&pool, None).await.expect("formats"),
        tone_distribution(&pool, None).await.expect("tones"),
    ] {
        assert!(!rows.is_empty());
        let count_total: i64 = rows.iter().map(|r| r.count).sum();
        assert_eq!(count_total, i64::try_from(batch.len()).unwrap());
        let pct_total: f64 = rows.iter().map(|r| r.pct).sum();
        assert!((pct_total - 1.0).abs() < 1e-9, "pct sum: {pct_total}");
    }

    let scoped = theme_distribution(&pool, Some("man_matters"))
        .await
        .expect("scoped themes");
    assert!(scoped
        .iter()
        .all(|r| r.label == "hair_loss" || r.label == "energy"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn longevity_buckets_partition_the_corpus(pool: sqlx::PgPool) {
    let batch = seeded_batch(10);
    upsert_ads(&pool, &batch).await.expect("upsert");

    let buckets = longevity_distribution(&pool, None).await.expect("buckets");
    let known = ["0-6", "7-13", "14-29", "30-59", "60+"];
    assert!(buckets.iter().all(|b| known.contains(&b.bucket.as_str())));

    let total: i64 = buckets.iter().map(|b| b.count).sum();
    assert_eq!(total, i64::try_from(batch.len()).unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn top_spenders_orders_and_limits(pool: sqlx::PgPool) {
    let batch = seeded_batch(11);
    upsert_ads(&pool, &batch).await.expect("upsert");

    let top = top_spenders(&pool, None, 2).await.expect("top spenders");
    assert_eq!(top.len(), 2);
    assert!(top[0].total_spend_max >= top[1].total_spend_max);
}

#[sqlx::test(migrations = "../../migrations")]
async fn brief_stats_summarizes_one_brand(pool: sqlx::PgPool) {
    let batch = seeded_batch(12);
    upsert_ads(&pool, &batch).await.expect("upsert");

    let stats = brief_stats(&pool, "bebodywise").await.expect("stats");
    let brand_ads: Vec<_> = batch.iter().filter(|r| r.brand == "bebodywise").collect();
    assert_eq!(stats.total_ads, i64::try_from(brand_ads.len()).unwrap());
    assert_eq!(stats.competitor_count, 2);
    assert!(stats.avg_days_running > 0.0);
    assert!(stats.longest_running_days >= 1);
    let spender = stats.top_spender.expect("top spender present");
    assert!(spender == "OZiva" || spender == "Kapiva");

    let longest = longest_running_ads(&pool, "bebodywise", 5)
        .await
        .expect("longest running");
    assert_eq!(longest.len(), 5);
    for pair in longest.windows(2) {
        assert!(pair[0].days_running >= pair[1].days_running);
    }
    assert_eq!(longest[0].days_running, stats.longest_running_days);

    let shares = theme_distribution(&pool, Some("bebodywise"))
        .await
        .expect("shares");
    assert!(shares
        .iter()
        .all(|s| s.label == "weight" || s.label == "immunity"));
    let pct_total: f64 = shares.iter().map(|s| s.pct).sum();
    assert!((pct_total - 1.0).abs() < 1e-9);
}

#[sqlx::test(migrations = "../../migrations")]
async fn brief_stats_on_empty_corpus_is_all_zeros(pool: sqlx::PgPool) {
    let stats = brief_stats(&pool, "nobody").await.expect("stats");
    assert_eq!(stats.total_ads, 0);
    assert_eq!(stats.active_ads, 0);
    assert_eq!(stats.competitor_count, 0);
    assert_eq!(stats.total_spend_max, 0);
    assert!(stats.top_spender.is_none());
}

// ---------------------------------------------------------------------------
// Section 3: Briefs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn latest_brief_returns_most_recent_for_brand(pool: sqlx::PgPool) {
    insert_brief(&pool, "bebodywise", "# Week 1", &json!({"total_ads": 10}))
        .await
        .expect("first brief");
    let second = insert_brief(&pool, "bebodywise", "# Week 2", &json!({"total_ads": 12}))
        .await
        .expect("second brief");
    insert_brief(&pool, "man_matters", "# Other Brand", &json!({}))
        .await
        .expect("other brand brief");

    let latest = latest_brief(&pool, "bebodywise").await.expect("latest");
    assert_eq!(latest.id, second.id);
    assert_eq!(latest.markdown, "# Week 2");
    assert_eq!(latest.stats_json["total_ads"], 12);
}

#[sqlx::test(migrations = "../../migrations")]
async fn latest_brief_for_unknown_brand_is_not_found(pool: sqlx::PgPool) {
    let err = latest_brief(&pool, "little_joys").await.unwrap_err();
    assert!(matches!(err, DbError::NotFound));
}
