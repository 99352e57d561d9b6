//! Data payload a brief is written from.
//!
//! The server assembles a [`BriefStats`] from the analytics queries; both the
//! prompt builder and the offline fallback consume the same payload, and it is
//! stored alongside the generated markdown for later inspection.

use serde::{Deserialize, Serialize};

/// Share threshold below which a theme counts as a creative gap, in percent.
pub const GAP_THRESHOLD_PCT: f64 = 15.0;

/// One label's slice of a distribution. `pct` is 0–100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub count: i64,
    pub pct: f64,
}

/// One of the longest-surviving creatives in the corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LongRunner {
    pub competitor_name: String,
    pub headline: String,
    pub days_running: i64,
    pub message_theme: String,
    pub emotional_tone: String,
    pub ad_format: String,
}

/// A theme the competitive set under-uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gap {
    pub theme: String,
    pub pct: f64,
}

/// Everything the brief is written from, scoped to one brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefStats {
    pub brand: String,
    pub brand_label: String,
    pub competitors: Vec<String>,
    pub total_ads: i64,
    pub active_ads: i64,
    pub avg_days_running: f64,
    pub format_distribution: Vec<Slice>,
    pub theme_distribution: Vec<Slice>,
    pub tone_distribution: Vec<Slice>,
    pub longest_running: Vec<LongRunner>,
    pub gaps: Vec<Gap>,
}

/// Find the brand themes whose competitive share falls below
/// [`GAP_THRESHOLD_PCT`]. Themes absent from the distribution count as 0%.
#[must_use]
pub fn creative_gaps(brand_themes: &[String], theme_distribution: &[Slice]) -> Vec<Gap> {
    brand_themes
        .iter()
        .filter_map(|theme| {
            let pct = theme_distribution
                .iter()
                .find(|s| &s.label == theme)
                .map_or(0.0, |s| s.pct);
            (pct < GAP_THRESHOLD_PCT).then(|| Gap {
                theme: theme.clone(),
                pct,
            })
        })
        .collect()
}

/// Title-case a snake_case label for display ("social_proof" -> "Social Proof").
#[must_use]
pub fn display_label(label: &str) -> String {
    label
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(label: &str, count: i64, pct: f64) -> Slice {
        Slice {
            label: label.to_string(),
            count,
            pct,
        }
    }

    #[test]
    fn gaps_include_underused_and_missing_themes() {
        let themes = vec![
            "weight".to_string(),
            "immunity".to_string(),
            "energy".to_string(),
        ];
        let distribution = vec![
            slice("weight", 40, 50.0),
            slice("immunity", 10, 12.5),
            // "energy" never appears in the corpus.
        ];

        let gaps = creative_gaps(&themes, &distribution);
        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].theme, "immunity");
        assert!((gaps[0].pct - 12.5).abs() < f64::EPSILON);
        assert_eq!(gaps[1].theme, "energy");
        assert!(gaps[1].pct.abs() < f64::EPSILON);
    }

    #[test]
    fn saturated_themes_are_not_gaps() {
        let themes = vec!["weight".to_string()];
        let distribution = vec![slice("weight", 40, 15.0)];
        assert!(creative_gaps(&themes, &distribution).is_empty());
    }

    #[test]
    fn display_label_title_cases_snake_case() {
        assert_eq!(display_label("social_proof"), "Social Proof");
        assert_eq!(display_label("weight"), "Weight");
        assert_eq!(display_label("hair_loss"), "Hair Loss");
    }
}
