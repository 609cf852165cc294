//! The six capped relevance signals.
//!
//! Each signal is independent of the others and degrades to `0.0` when
//! its underlying field is missing or zero; none of them can go
//! negative on a validated record.

#![allow(clippy::cast_precision_loss)]

use chrono::{DateTime, Utc};
use gitfolio_core::ScoreConfig;

/// Popularity: `min(stars * multiplier, cap)`.
pub(crate) fn popularity(stars: i64, config: &ScoreConfig) -> f64 {
    (stars as f64 * config.star_multiplier).min(config.star_cap)
}

/// Reach: `min(forks * multiplier, cap)`.
pub(crate) fn reach(forks: i64, config: &ScoreConfig) -> f64 {
    (forks as f64 * config.fork_multiplier).min(config.fork_cap)
}

/// Scale: `min(size_kb / divisor, cap)`, real division.
pub(crate) fn scale(size_kb: i64, config: &ScoreConfig) -> f64 {
    (size_kb as f64 / config.size_divisor).min(config.size_cap)
}

/// Ecosystem fit: full bonus when the language label is an exact member
/// of the configured popular set, else 0.
pub(crate) fn ecosystem(language: Option<&str>, config: &ScoreConfig) -> f64 {
    match language {
        Some(label) if config.popular_languages.iter().any(|l| l == label) => {
            config.language_bonus
        }
        _ => 0.0,
    }
}

/// Recency: tiered by whole days since the last update. The first tier
/// whose `max_days` exceeds the age wins; older than every tier is 0.
///
/// A future `updated_at` yields a negative age and lands in the first
/// tier, the same outcome the raw day arithmetic gives.
pub(crate) fn recency(updated_at: DateTime<Utc>, now: DateTime<Utc>, config: &ScoreConfig) -> f64 {
    let age_days = (now - updated_at).num_days();
    config
        .recency_tiers
        .iter()
        .find(|tier| age_days < tier.max_days)
        .map_or(0.0, |tier| tier.bonus)
}

/// Presentation: full bonus when a description is present and strictly
/// longer than the configured minimum, counted in Unicode scalars.
pub(crate) fn presentation(description: Option<&str>, config: &ScoreConfig) -> f64 {
    match description {
        Some(text) if text.chars().count() > config.description_min_chars => {
            config.description_bonus
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).single().expect("valid date")
    }

    #[test]
    fn popularity_caps_at_thirty() {
        let config = ScoreConfig::default();
        assert!((popularity(0, &config) - 0.0).abs() < f64::EPSILON);
        assert!((popularity(10, &config) - 20.0).abs() < f64::EPSILON);
        assert!((popularity(15, &config) - 30.0).abs() < f64::EPSILON);
        assert!((popularity(5_000, &config) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reach_caps_at_twenty() {
        let config = ScoreConfig::default();
        assert!((reach(3, &config) - 9.0).abs() < f64::EPSILON);
        assert!((reach(7, &config) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scale_uses_real_division() {
        let config = ScoreConfig::default();
        assert!((scale(500, &config) - 0.5).abs() < f64::EPSILON);
        assert!((scale(20_000, &config) - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ecosystem_is_exact_label_membership() {
        let config = ScoreConfig::default();
        assert!((ecosystem(Some("Rust"), &config) - 10.0).abs() < f64::EPSILON);
        // Case and substring variants do not count.
        assert!((ecosystem(Some("rust"), &config) - 0.0).abs() < f64::EPSILON);
        assert!((ecosystem(Some("Rusty"), &config) - 0.0).abs() < f64::EPSILON);
        assert!((ecosystem(None, &config) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn recency_tiers_step_down() {
        let config = ScoreConfig::default();
        let at = |days: i64| recency(now() - Duration::days(days), now(), &config);

        assert!((at(5) - 15.0).abs() < f64::EPSILON);
        assert!((at(29) - 15.0).abs() < f64::EPSILON);
        assert!((at(30) - 10.0).abs() < f64::EPSILON);
        assert!((at(89) - 10.0).abs() < f64::EPSILON);
        assert!((at(90) - 5.0).abs() < f64::EPSILON);
        assert!((at(179) - 5.0).abs() < f64::EPSILON);
        assert!((at(180) - 0.0).abs() < f64::EPSILON);
        assert!((at(730) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn future_update_lands_in_most_recent_tier() {
        let config = ScoreConfig::default();
        let future = now() + Duration::days(3);
        assert!((recency(future, now(), &config) - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn presentation_requires_strictly_more_than_minimum() {
        let config = ScoreConfig::default();
        let exactly_twenty = "a".repeat(20);
        let twenty_one = "a".repeat(21);

        assert!((presentation(None, &config) - 0.0).abs() < f64::EPSILON);
        assert!((presentation(Some(""), &config) - 0.0).abs() < f64::EPSILON);
        assert!((presentation(Some(&exactly_twenty), &config) - 0.0).abs() < f64::EPSILON);
        assert!((presentation(Some(&twenty_one), &config) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn presentation_counts_unicode_scalars() {
        let config = ScoreConfig::default();
        // 21 scalars, more than 21 bytes.
        let text = "é".repeat(21);
        assert!((presentation(Some(&text), &config) - 10.0).abs() < f64::EPSILON);
    }
}
