//! Start-date, end-date and activity modelling for synthesized ads.

use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Share of ads drawn from the long-running window (60–90 days old).
/// Guarantees a longevity tail for the dashboard's 60+ day analytics.
const LONG_RUNNING_SHARE: f64 = 0.30;

/// Stop probability grows linearly with age and is capped here.
const MAX_STOP_PROBABILITY: f64 = 0.70;

/// Days of age at which the stop probability would reach 1.0 uncapped.
const STOP_RAMP_DAYS: f64 = 120.0;

/// Ads that stopped did so at most this many days ago.
const MAX_STOPPED_DAYS_AGO: i64 = 30;

/// Draw a start date: 30% of ads started 60–90 days ago, the rest 1–59
/// days ago.
pub fn draw_start_date<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> NaiveDate {
    let days_ago = if rng.random::<f64>() < LONG_RUNNING_SHARE {
        rng.random_range(60..=90)
    } else {
        rng.random_range(1..=59)
    };
    today - Duration::days(days_ago)
}

/// Decide whether the ad is still running and, if not, when it stopped.
///
/// The stop probability is `min(0.70, age_days / 120)` — older ads are more
/// likely to have ended, capped at 70%. A stopped ad ended between 1 and
/// `min(age_days - 1, 30)` days ago so the end date is strictly between the
/// start date and today. Ads younger than 2 days have no valid stop day and
/// are always active.
#[allow(clippy::cast_precision_loss)]
pub fn draw_end_date<R: Rng + ?Sized>(
    today: NaiveDate,
    start: NaiveDate,
    force_active: bool,
    rng: &mut R,
) -> (Option<NaiveDate>, bool) {
    let age_days = (today - start).num_days();
    let stop_probability = (age_days as f64 / STOP_RAMP_DAYS).min(MAX_STOP_PROBABILITY);

    if force_active || age_days < 2 || rng.random::<f64>() > stop_probability {
        return (None, true);
    }

    let stopped_days_ago = rng.random_range(1..=(age_days - 1).min(MAX_STOPPED_DAYS_AGO));
    (Some(today - Duration::days(stopped_days_ago)), false)
}

/// Days the ad has been (or was) running, derived from the timeline rather
/// than drawn independently. Inactive ads without an end date report 0;
/// generation never produces that combination.
pub fn days_running(
    today: NaiveDate,
    start: NaiveDate,
    end: Option<NaiveDate>,
    is_active: bool,
) -> i64 {
    if is_active {
        (today - start).num_days()
    } else {
        end.map_or(0, |e| (e - start).num_days())
    }
}
