//! Synthetic ad-corpus generator.
//!
//! Produces statistically plausible, internally consistent competitor ad
//! records for every brand/competitor pair in the catalog: format mix,
//! spend tier, tone distribution, lifespan and active/inactive ratio all
//! follow fixed weighted distributions, and copy text comes from a
//! theme×tone template bank. Generation is pure — catalog in, records out,
//! randomness injected — so batches are reproducible under a seeded RNG.

use chrono::{NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use adintel_core::catalog::{BrandEntry, Catalog, CompetitorEntry};

pub mod copy;
pub mod sampler;
pub mod spend;
pub mod timeline;

pub use sampler::WeightedSampler;
pub use spend::SpendTier;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("weighted distribution has no entries")]
    EmptyDistribution,

    #[error("weighted distribution has invalid weight {0}")]
    InvalidWeight(f64),

    #[error("weighted distribution weights sum to zero")]
    ZeroTotalWeight,

    #[error("brand '{0}' has no themes configured")]
    EmptyThemes(String),

    #[error("catalog has no competitors")]
    EmptyCatalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdFormat {
    Static,
    Video,
    Carousel,
}

impl AdFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AdFormat::Static => "static",
            AdFormat::Video => "video",
            AdFormat::Carousel => "carousel",
        }
    }
}

impl std::fmt::Display for AdFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Aspiration,
    Fear,
    Trust,
    Urgency,
    SocialProof,
    Humor,
}

impl Tone {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Tone::Aspiration => "aspiration",
            Tone::Fear => "fear",
            Tone::Trust => "trust",
            Tone::Urgency => "urgency",
            Tone::SocialProof => "social_proof",
            Tone::Humor => "humor",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "facebook")]
    Facebook,
    #[serde(rename = "instagram")]
    Instagram,
    #[serde(rename = "facebook,instagram")]
    FacebookInstagram,
}

impl Platform {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::FacebookInstagram => "facebook,instagram",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker stored in every synthesized record's `source` column.
pub const SYNTHETIC_SOURCE: &str = "mock";

/// One synthesized competitor advertisement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdRecord {
    pub id: Uuid,
    /// Stable unique ad identifier, `mock_<16 hex chars>`.
    pub ad_id: String,
    pub competitor_name: String,
    pub competitor_page_id: String,
    pub brand: String,
    pub vertical: String,
    pub ad_format: AdFormat,
    pub message_theme: String,
    pub emotional_tone: Tone,
    pub headline: String,
    pub body_text: String,
    pub cta: String,
    pub platform: Platform,
    pub estimated_spend_min: i64,
    pub estimated_spend_max: i64,
    pub start_date: NaiveDate,
    /// `None` iff the ad is still running.
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub days_running: i64,
    /// Carousel card count; other formats leave this unset.
    pub num_cards: Option<i16>,
    pub country: String,
    pub source: String,
}

/// Ads-per-competitor bounds, inclusive.
const MIN_ADS_PER_COMPETITOR: u32 = 8;
const MAX_ADS_PER_COMPETITOR: u32 = 14;

const CTA_OPTIONS: &[&str] = &[
    "Shop Now",
    "Learn More",
    "Get Offer",
    "Sign Up",
    "Order Now",
    "Book Now",
    "Download",
    "Watch More",
];

/// Batch generator bound to a validated catalog.
///
/// Construction builds all weighted samplers and rejects degenerate
/// configuration up front; after that, [`Generator::batch`] is infallible.
#[derive(Debug)]
pub struct Generator<'a> {
    catalog: &'a Catalog,
    formats: WeightedSampler<AdFormat>,
    tones: WeightedSampler<Tone>,
    platforms: WeightedSampler<Platform>,
    static_tiers: WeightedSampler<SpendTier>,
    video_tiers: WeightedSampler<SpendTier>,
    carousel_tiers: WeightedSampler<SpendTier>,
}

impl<'a> Generator<'a> {
    /// Bind a generator to a catalog, validating weight tables and catalog
    /// value lists.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::EmptyCatalog`] when no competitors are
    /// configured, [`SynthError::EmptyThemes`] for a brand without themes,
    /// or a sampler construction error for a malformed weight table.
    pub fn new(catalog: &'a Catalog) -> Result<Self, SynthError> {
        if catalog.competitor_count() == 0 {
            return Err(SynthError::EmptyCatalog);
        }
        for brand in &catalog.brands {
            if brand.themes.is_empty() {
                return Err(SynthError::EmptyThemes(brand.key.clone()));
            }
        }

        Ok(Self {
            catalog,
            formats: WeightedSampler::new(vec![
                (AdFormat::Static, 0.40),
                (AdFormat::Video, 0.35),
                (AdFormat::Carousel, 0.25),
            ])?,
            tones: WeightedSampler::new(vec![
                (Tone::Aspiration, 0.30),
                (Tone::Fear, 0.20),
                (Tone::Trust, 0.20),
                (Tone::Urgency, 0.15),
                (Tone::SocialProof, 0.10),
                (Tone::Humor, 0.05),
            ])?,
            platforms: WeightedSampler::new(vec![
                (Platform::Facebook, 0.25),
                (Platform::Instagram, 0.35),
                (Platform::FacebookInstagram, 0.40),
            ])?,
            static_tiers: WeightedSampler::new(vec![
                (SpendTier::Low, 0.40),
                (SpendTier::Mid, 0.45),
                (SpendTier::High, 0.15),
            ])?,
            video_tiers: WeightedSampler::new(vec![
                (SpendTier::Mid, 0.40),
                (SpendTier::High, 0.40),
                (SpendTier::Viral, 0.20),
            ])?,
            carousel_tiers: WeightedSampler::new(vec![
                (SpendTier::Mid, 0.50),
                (SpendTier::High, 0.35),
                (SpendTier::Viral, 0.15),
            ])?,
        })
    }

    /// Generate one full batch: 8–14 ads per competitor (independent uniform
    /// draws), shuffled so output order implies no brand grouping.
    pub fn batch<R: Rng + ?Sized>(&self, today: NaiveDate, rng: &mut R) -> Vec<AdRecord> {
        let mut records = Vec::new();

        for brand in &self.catalog.brands {
            for competitor in &brand.competitors {
                let num_ads = rng.random_range(MIN_ADS_PER_COMPETITOR..=MAX_ADS_PER_COMPETITOR);
                for _ in 0..num_ads {
                    records.push(self.record(brand, competitor, today, rng));
                }
            }
        }

        records.shuffle(rng);
        records
    }

    fn record<R: Rng + ?Sized>(
        &self,
        brand: &BrandEntry,
        competitor: &CompetitorEntry,
        today: NaiveDate,
        rng: &mut R,
    ) -> AdRecord {
        let ad_format = *self.formats.sample(rng);
        let emotional_tone = *self.tones.sample(rng);
        let message_theme = brand.themes[rng.random_range(0..brand.themes.len())].clone();

        let copy = copy::pick_copy(&message_theme, emotional_tone, rng);

        let start_date = timeline::draw_start_date(today, rng);
        let (end_date, is_active) = timeline::draw_end_date(today, start_date, false, rng);
        let days_running = timeline::days_running(today, start_date, end_date, is_active);

        let tier = *self.tier_sampler(ad_format).sample(rng);
        let (estimated_spend_min, estimated_spend_max) = spend::draw_spend(tier, rng);

        let platform = *self.platforms.sample(rng);
        let cta = CTA_OPTIONS[rng.random_range(0..CTA_OPTIONS.len())].to_string();
        let num_cards = (ad_format == AdFormat::Carousel).then(|| rng.random_range(3..=6));

        AdRecord {
            id: Uuid::new_v4(),
            ad_id: synthetic_ad_id(),
            competitor_name: competitor.name.clone(),
            competitor_page_id: competitor.page_id.clone(),
            brand: brand.key.clone(),
            vertical: brand.vertical.clone(),
            ad_format,
            message_theme,
            emotional_tone,
            headline: copy.headline.to_string(),
            body_text: copy.body.to_string(),
            cta,
            platform,
            estimated_spend_min,
            estimated_spend_max,
            start_date,
            end_date,
            is_active,
            days_running,
            num_cards,
            country: competitor.country.clone(),
            source: SYNTHETIC_SOURCE.to_string(),
        }
    }

    fn tier_sampler(&self, format: AdFormat) -> &WeightedSampler<SpendTier> {
        match format {
            AdFormat::Static => &self.static_tiers,
            AdFormat::Video => &self.video_tiers,
            AdFormat::Carousel => &self.carousel_tiers,
        }
    }
}

/// Generate a batch for the catalog using the thread-local RNG and today's
/// date.
///
/// # Errors
///
/// Returns [`SynthError`] when the catalog or a weight table is degenerate;
/// given a well-formed catalog, generation itself cannot fail.
pub fn generate(catalog: &Catalog) -> Result<Vec<AdRecord>, SynthError> {
    let generator = Generator::new(catalog)?;
    let mut rng = rand::rng();
    Ok(generator.batch(Utc::now().date_naive(), &mut rng))
}

fn synthetic_ad_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("mock_{}", &hex[..16])
}
