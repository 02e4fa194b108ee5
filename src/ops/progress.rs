use serde::Serialize;

/// Share of done items as a percentage in `[0, 100]`.
///
/// Zero when there is nothing to show (`total == 0` or `done == 0`),
/// otherwise `(100 / total) * done`, unrounded.
pub fn percent(total: usize, done: usize) -> f64 {
    if total == 0 || done == 0 {
        return 0.0;
    }
    // A view reporting more ticks than rows must not overfill the bar
    ((100.0 / total as f64) * done as f64).min(100.0)
}

/// Derived progress snapshot. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressState {
    pub total: usize,
    pub done: usize,
    pub percent: f64,
}

impl ProgressState {
    pub fn new(total: usize, done: usize) -> Self {
        ProgressState {
            total,
            done,
            percent: percent(total, done),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_show_is_zero() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(5, 0), 0.0);
        // done without total is a view bug; still no division by zero
        assert_eq!(percent(0, 3), 0.0);
    }

    #[test]
    fn proportional() {
        assert_eq!(percent(4, 2), 50.0);
        assert_eq!(percent(3, 3), 100.0);
        assert_eq!(percent(4, 1), 25.0);
    }

    #[test]
    fn unrounded() {
        let p = percent(3, 1);
        assert!((p - 33.333_333).abs() < 1e-4);
    }

    #[test]
    fn clamped_to_full() {
        assert_eq!(percent(2, 5), 100.0);
    }

    #[test]
    fn state_bundles_values() {
        let state = ProgressState::new(4, 3);
        assert_eq!(state.total, 4);
        assert_eq!(state.done, 3);
        assert_eq!(state.percent, 75.0);
    }
}
