//! Most profitable contiguous window in a spread series.
//!
//! Single left-to-right scan with a running sum that is abandoned (reset
//! to zero, start moved past the current period) whenever it turns
//! negative. A window only replaces the best when its sum is strictly
//! greater, so all-non-positive input leaves the default `(0, 0)`.

use pairquant_core::TradingWindow;
use tracing::trace;

/// Best window together with its cumulative spread.
///
/// The sum is `0.0` when no period has positive cumulative spread.
pub fn best_window_with_sum(spread: &[f64]) -> (TradingWindow, f64) {
    let mut best = TradingWindow::default();
    let mut best_sum = 0.0;
    let mut running = 0.0;
    let mut start = 0;

    for (i, &s) in spread.iter().enumerate() {
        running += s;

        if running < 0.0 {
            trace!(period = i, "running spread negative, restarting window");
            running = 0.0;
            start = i + 1;
        }

        if running > best_sum {
            best_sum = running;
            best = TradingWindow { entry: start, exit: i };
        }
    }

    (best, best_sum)
}

/// Entry/exit periods of the contiguous range with maximal cumulative spread.
pub fn best_window(spread: &[f64]) -> TradingWindow {
    best_window_with_sum(spread).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regression_trace() {
        // Running sums 2, 1, 4, 0, 5. The zero at period 3 is not negative,
        // so no reset happens and the window spans the whole series.
        let (window, sum) = best_window_with_sum(&[2.0, -1.0, 3.0, -4.0, 5.0]);
        assert_eq!(window, TradingWindow::new(0, 4));
        assert_eq!(sum, 5.0);
    }

    #[test]
    fn test_reset_moves_start() {
        // Running sums 1, -2 (reset), 3, 5, 4.
        let (window, sum) = best_window_with_sum(&[1.0, -3.0, 3.0, 2.0, -1.0]);
        assert_eq!(window, TradingWindow::new(2, 3));
        assert_eq!(sum, 5.0);
    }

    #[test]
    fn test_all_negative() {
        assert_eq!(best_window(&[-1.0, -2.0, -3.0]), TradingWindow::new(0, 0));
        assert_eq!(best_window_with_sum(&[-1.0, -2.0, -3.0]).1, 0.0);
    }

    #[test]
    fn test_all_zero_and_empty() {
        assert_eq!(best_window(&[0.0, 0.0]), TradingWindow::new(0, 0));
        assert_eq!(best_window(&[]), TradingWindow::new(0, 0));
    }

    #[test]
    fn test_first_maximum_kept_on_tie() {
        // Window (0, 0) reaches 2 first; (2, 2) only ties it.
        assert_eq!(best_window(&[2.0, -5.0, 2.0]), TradingWindow::new(0, 0));
    }

    #[test]
    fn test_single_positive_after_negatives() {
        assert_eq!(best_window(&[-1.0, -1.0, 0.5]), TradingWindow::new(2, 2));
    }

    #[test]
    fn test_idempotent() {
        let spread = [0.01, -0.02, 0.03, 0.01, -0.005];
        assert_eq!(best_window_with_sum(&spread), best_window_with_sum(&spread));
    }
}
