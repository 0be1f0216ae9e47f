use crate::genres::GenreExtractor;

/// Result of one per-genre aggregation. `count` is the number of matching
/// records; `value` is `None` when no values were available to reduce.
#[derive(Debug, PartialEq)]
pub struct GenreStat {
    pub count: usize,
    pub value: Option<f64>,
}

/// Filter/map/reduce over `(genres field, selected value)` rows.
///
/// Keeps rows whose genres field contains `token` as a whole word, collects
/// their non-null values, and reduces them. A zero-match token yields
/// `count == 0` and `value == None`; the reducer is never handed an empty
/// slice.
pub fn aggregate<'a, I, R>(rows: I, token: &str, ex: &GenreExtractor, reduce: R) -> GenreStat
where
    I: IntoIterator<Item = (Option<&'a str>, Option<f64>)>,
    R: FnOnce(&mut [f64]) -> Option<f64>,
{
    let mut kept = Vec::new();
    let mut count = 0;
    for (genres, value) in rows {
        if ex.matches(genres, token) {
            count += 1;
            if let Some(v) = value {
                kept.push(v);
            }
        }
    }
    let value = if kept.is_empty() {
        None
    } else {
        reduce(&mut kept)
    };
    GenreStat { count, value }
}

#[cfg(test)]
mod test_agg {
    use super::*;
    use crate::stats;

    fn rows() -> Vec<(Option<&'static str>, Option<f64>)> {
        vec![
            (Some("Action,Drama"), Some(7.0)),
            (Some("Drama"), Some(5.0)),
            (None, Some(9.0)),
        ]
    }

    #[test]
    fn test_median_per_matching_token() {
        let ex = GenreExtractor::new();
        let drama = aggregate(rows(), "drama", &ex, stats::median);
        assert_eq!(
            drama,
            GenreStat {
                count: 2,
                value: Some(6.0)
            }
        );

        let action = aggregate(rows(), "action", &ex, stats::median);
        assert_eq!(
            action,
            GenreStat {
                count: 1,
                value: Some(7.0)
            }
        );
    }

    #[test]
    fn test_zero_match_is_no_data() {
        let ex = GenreExtractor::new();
        let comedy = aggregate(rows(), "comedy", &ex, stats::median);
        assert_eq!(comedy, GenreStat { count: 0, value: None });
    }

    #[test]
    fn test_matching_rows_without_values_still_count() {
        let ex = GenreExtractor::new();
        let rows = vec![(Some("Drama"), None)];
        let stat = aggregate(rows, "drama", &ex, stats::median);
        assert_eq!(stat, GenreStat { count: 1, value: None });
    }

    #[test]
    fn test_reducer_choice_is_callers() {
        let ex = GenreExtractor::new();
        let rows = vec![
            (Some("Drama"), Some(10.0)),
            (Some("Drama"), Some(20.0)),
            (Some("Drama"), Some(30.0)),
            (Some("Drama"), Some(40.0)),
        ];
        let stat = aggregate(rows, "drama", &ex, |v| stats::percentile(v, 25.0));
        assert_eq!(stat.count, 4);
        assert_eq!(stat.value, Some(17.5));
    }
}
