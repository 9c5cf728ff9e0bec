//! Level resolution from cumulative points
//!
//! `thresholds[i]` is the minimum score that unlocks level `i + 1`, so
//! `thresholds[0]` is always 0. Past the last threshold there is no next
//! level; progress keeps growing over a span equal to the last one.

use super::models::{Level, Progress, Score};

/// Highest level whose threshold is at or below `score`, or level 1 if none is
pub fn resolve_level(score: Score, thresholds: &[Score]) -> Level {
    thresholds
        .iter()
        .rposition(|&threshold| score >= threshold)
        .map(|idx| Level::new(idx + 1))
        .unwrap_or(Level::FIRST)
}

/// Width in points of `level`'s band. The top level reuses the span below it.
fn level_span(level: Level, thresholds: &[Score]) -> Option<Score> {
    let start = *thresholds.get(level.index())?;
    match thresholds.get(level.number()) {
        Some(&next) => Some(next.saturating_sub(start)),
        None if level.index() > 0 => Some(start.saturating_sub(thresholds[level.index() - 1])),
        None => None,
    }
}

/// Fraction of the way from `level`'s threshold to the next.
///
/// Unclamped: callers that display a percentage clamp it. Returns zero
/// when the band has no width, which validated configurations rule out.
pub fn progress(score: Score, level: Level, thresholds: &[Score]) -> Progress {
    let start = thresholds.get(level.index()).copied().unwrap_or(0);
    match level_span(level, thresholds) {
        Some(span) if span > 0 => {
            Progress::new((score as f64 - start as f64) / span as f64)
        }
        _ => Progress::new(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: [Score; 5] = [0, 50, 5000, 6000, 12000];

    #[test]
    fn test_zero_score_is_first_level() {
        assert_eq!(resolve_level(0, &THRESHOLDS), Level::new(1));
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(resolve_level(49, &THRESHOLDS), Level::new(1));
        assert_eq!(resolve_level(50, &THRESHOLDS), Level::new(2));
        assert_eq!(resolve_level(59, &THRESHOLDS), Level::new(2));
        assert_eq!(resolve_level(4999, &THRESHOLDS), Level::new(2));
        assert_eq!(resolve_level(5000, &THRESHOLDS), Level::new(3));
        assert_eq!(resolve_level(6000, &THRESHOLDS), Level::new(4));
        assert_eq!(resolve_level(12000, &THRESHOLDS), Level::new(5));
        assert_eq!(resolve_level(u32::MAX, &THRESHOLDS), Level::new(5));
    }

    #[test]
    fn test_below_all_thresholds_defaults_to_first() {
        assert_eq!(resolve_level(3, &[10, 20]), Level::FIRST);
    }

    #[test]
    fn test_resolve_level_is_monotonic() {
        let mut last = Level::FIRST;
        for score in (0..20_000).step_by(7) {
            let level = resolve_level(score, &THRESHOLDS);
            assert!(level >= last, "level dropped at score {}", score);
            last = level;
        }
    }

    #[test]
    fn test_progress_within_level() {
        let p = progress(25, Level::new(1), &THRESHOLDS);
        assert_eq!(p.fraction, 0.5);

        let p = progress(49, Level::new(1), &THRESHOLDS);
        assert!((p.percent() - 98.0).abs() < 1e-9);

        let p = progress(5500, Level::new(3), &THRESHOLDS);
        assert_eq!(p.fraction, 0.5);
    }

    #[test]
    fn test_progress_at_top_level_repeats_last_span() {
        // Span from 6000 to 12000 is reused past 12000
        let p = progress(12000, Level::new(5), &THRESHOLDS);
        assert_eq!(p.fraction, 0.0);
        let p = progress(15000, Level::new(5), &THRESHOLDS);
        assert_eq!(p.fraction, 0.5);
        let p = progress(30000, Level::new(5), &THRESHOLDS);
        assert!(p.fraction > 1.0);
        assert_eq!(p.percent(), 100.0);
    }

    #[test]
    fn test_progress_without_span_is_zero() {
        assert_eq!(progress(40, Level::FIRST, &[0]).fraction, 0.0);
        assert_eq!(progress(40, Level::new(2), &[0, 0]).fraction, 0.0);
    }

    #[test]
    fn test_pure_functions_are_repeatable() {
        for score in [0, 49, 50, 6000, 13000] {
            let level = resolve_level(score, &THRESHOLDS);
            assert_eq!(level, resolve_level(score, &THRESHOLDS));
            assert_eq!(
                progress(score, level, &THRESHOLDS),
                progress(score, level, &THRESHOLDS)
            );
        }
    }
}
