/// Median of the values, `None` when there are none.
/// Sorts in place; the midpoint average is used for even lengths.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable_by(f64::total_cmp);
    let n = values.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Percentile at `p` (0..=100), linearly interpolated between closest ranks.
/// `None` when there are no values.
pub fn percentile(values: &mut [f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable_by(f64::total_cmp);
    let p = p.clamp(0.0, 100.0);
    let rank = p / 100.0 * (values.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Some(values[lo]);
    }
    let frac = rank - lo as f64;
    Some(values[lo] + frac * (values[hi] - values[lo]))
}

#[cfg(test)]
mod test_stats {
    use super::*;

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&mut [9.0, 1.0, 5.0]), Some(5.0));
    }

    #[test]
    fn test_median_even_averages_midpoints() {
        assert_eq!(median(&mut [7.0, 5.0]), Some(6.0));
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_median_empty_is_no_data() {
        assert_eq!(median(&mut []), None);
    }

    #[test]
    fn test_percentile_interpolates() {
        let mut v = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(percentile(&mut v, 0.0), Some(10.0));
        assert_eq!(percentile(&mut v, 50.0), Some(25.0));
        assert_eq!(percentile(&mut v, 100.0), Some(40.0));
        assert_eq!(percentile(&mut v, 25.0), Some(17.5));
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&mut [42.0], 75.0), Some(42.0));
    }

    #[test]
    fn test_percentile_empty_is_no_data() {
        assert_eq!(percentile(&mut [], 50.0), None);
    }

    #[test]
    fn test_percentile_out_of_range_clamps() {
        let mut v = [1.0, 2.0];
        assert_eq!(percentile(&mut v, -10.0), Some(1.0));
        assert_eq!(percentile(&mut v, 400.0), Some(2.0));
    }
}
