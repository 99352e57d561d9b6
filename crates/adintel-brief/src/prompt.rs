//! Prompt construction for model-written briefs.

use std::fmt::Write as _;

use crate::types::{display_label, BriefStats};

/// Render the analyst prompt for a brand's stats payload.
///
/// The prompt embeds the aggregated corpus data and pins the exact markdown
/// section structure so generated briefs stay comparable week over week.
#[must_use]
pub fn build_prompt(stats: &BriefStats) -> String {
    let brand_label = &stats.brand_label;

    let format_lines = join_lines(stats.format_distribution.iter().map(|s| {
        format!(
            "- {}: {:.1}% ({} ads)",
            display_label(&s.label),
            s.pct,
            s.count
        )
    }));

    let longest_lines = join_lines(stats.longest_running.iter().enumerate().map(|(i, ad)| {
        format!(
            "{}. **{}** — \"{}\" — **{} days** — Theme: {}, Tone: {}",
            i + 1,
            ad.competitor_name,
            ad.headline,
            ad.days_running,
            display_label(&ad.message_theme),
            ad.emotional_tone,
        )
    }));

    let theme_lines = join_lines(stats.theme_distribution.iter().map(|s| {
        format!(
            "- {}: {:.1}% ({} ads)",
            display_label(&s.label),
            s.pct,
            s.count
        )
    }));

    let tone_lines = join_lines(stats.tone_distribution.iter().map(|s| {
        format!(
            "- {}: {:.1}% ({} ads)",
            display_label(&s.label),
            s.pct,
            s.count
        )
    }));

    let gap_lines = if stats.gaps.is_empty() {
        "- No significant gaps — all core themes are actively contested.".to_string()
    } else {
        join_lines(stats.gaps.iter().map(|g| {
            format!(
                "- {}: {:.1}% coverage (underexploited)",
                display_label(&g.theme),
                g.pct
            )
        }))
    };

    let dominant_theme = stats
        .theme_distribution
        .first()
        .map_or("aspiration", |s| s.label.as_str());

    let mut prompt = String::new();
    let _ = write!(
        prompt,
        "You are a senior competitive intelligence analyst. Analyze the following ad \
         library data and write a strategic brief in markdown for {brand_label}'s \
         marketing team.\n\
         \n\
         ---\n\
         \n\
         ## Input Data\n\
         \n\
         **Brand under analysis:** {brand_label}\n\
         **Competitors monitored:** {competitors}\n\
         **Total ads tracked:** {total} ({active} currently active)\n\
         **Average ad lifespan:** {lifespan:.1} days\n\
         \n\
         ## Ad Format Distribution\n\
         {format_lines}\n\
         \n\
         ## Top 5 Longest-Running Ads (battle-tested creatives — survived the algorithm longest)\n\
         {longest_lines}\n\
         \n\
         ## Message Theme Distribution\n\
         {theme_lines}\n\
         \n\
         ## Emotional Tone Distribution\n\
         {tone_lines}\n\
         \n\
         ## Creative Gaps (themes with low competitive saturation for {brand_label})\n\
         {gap_lines}\n\
         \n\
         ---\n\
         \n\
         Write a 400-word competitive intelligence brief using EXACTLY this markdown \
         structure. Use real percentages, specific competitor names, and actual headline \
         quotes from the data above. Be analytical, specific, and actionable — not generic.\n\
         \n\
         ## 🎯 Executive Summary\n\
         (2–3 sentences. Include specific numbers: total ads, active ads, competitor \
         count, avg lifespan.)\n\
         \n\
         ## 📊 Format Landscape\n\
         (What formats dominate, exact percentages, and what this signals for \
         {brand_label}'s creative mix.)\n\
         \n\
         ## 🏆 Battle-Tested Creatives\n\
         (Name at least 3 specific competitors and quote their longest-running \
         headlines. Identify what message pattern makes these creatives survive 60+ days.)\n\
         \n\
         ## ⚡ Theme & Tone Dominance\n\
         (Which themes are oversaturated with exact percentages? Which emotional tones \
         rule? What does the dominance of '{dominant_theme}' signal?)\n\
         \n\
         ## 🚀 Strategic Recommendations for {brand_label}\n\
         - (Specific recommendation tied to a gap or data point above)\n\
         - (Specific recommendation tied to format or tone insight above)\n\
         - (Specific recommendation tied to a battle-tested creative pattern above)",
        competitors = stats.competitors.join(", "),
        total = stats.total_ads,
        active = stats.active_ads,
        lifespan = stats.avg_days_running,
    );
    prompt
}

fn join_lines<I: Iterator<Item = String>>(lines: I) -> String {
    lines.collect::<Vec<_>>().join("\n")
}
