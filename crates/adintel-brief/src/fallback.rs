//! Rule-based brief composition for when no API key is configured.
//!
//! Produces the same section structure as the model-written brief so the
//! dashboard renders both identically, just with templated prose.

use std::fmt::Write as _;

use crate::types::{display_label, BriefStats};

/// Compose a brief directly from the stats payload, no model call involved.
#[must_use]
pub fn compose_fallback(stats: &BriefStats) -> String {
    let brand_label = &stats.brand_label;
    let mut out = String::new();

    let _ = writeln!(out, "## 🎯 Executive Summary");
    let _ = writeln!(
        out,
        "We are tracking {} ads ({} currently active) across {} competitors of \
         {brand_label}. The average creative survives {:.1} days before rotation.",
        stats.total_ads,
        stats.active_ads,
        stats.competitors.len(),
        stats.avg_days_running,
    );

    let _ = writeln!(out, "\n## 📊 Format Landscape");
    for slice in &stats.format_distribution {
        let _ = writeln!(
            out,
            "- **{}**: {:.1}% of the corpus ({} ads)",
            display_label(&slice.label),
            slice.pct,
            slice.count
        );
    }

    let _ = writeln!(out, "\n## 🏆 Battle-Tested Creatives");
    if stats.longest_running.is_empty() {
        let _ = writeln!(out, "No long-running creatives observed yet.");
    }
    for ad in &stats.longest_running {
        let _ = writeln!(
            out,
            "- **{}** — \"{}\" has run for {} days ({} / {}).",
            ad.competitor_name,
            ad.headline,
            ad.days_running,
            display_label(&ad.message_theme),
            ad.emotional_tone,
        );
    }

    let _ = writeln!(out, "\n## ⚡ Theme & Tone Dominance");
    if let Some(top_theme) = stats.theme_distribution.first() {
        let _ = writeln!(
            out,
            "**{}** leads messaging at {:.1}% of tracked ads.",
            display_label(&top_theme.label),
            top_theme.pct
        );
    }
    if let Some(top_tone) = stats.tone_distribution.first() {
        let _ = writeln!(
            out,
            "The dominant emotional register is **{}** ({:.1}%).",
            display_label(&top_tone.label),
            top_tone.pct
        );
    }

    let _ = writeln!(out, "\n## 🚀 Strategic Recommendations for {brand_label}");
    if stats.gaps.is_empty() {
        let _ = writeln!(
            out,
            "- All core themes are actively contested; differentiate on creative \
             quality and tone rather than topic selection."
        );
    } else {
        for gap in &stats.gaps {
            let _ = writeln!(
                out,
                "- **{}** sits at only {:.1}% competitive coverage — an \
                 underexploited angle worth testing.",
                display_label(&gap.theme),
                gap.pct
            );
        }
    }
    if let Some(ad) = stats.longest_running.first() {
        let _ = writeln!(
            out,
            "- Study {}'s \"{}\" pattern ({} days live) before the next creative sprint.",
            ad.competitor_name, ad.headline, ad.days_running
        );
    }

    out
}
