/// Points awarded for finishing positions 1 through 10.
const POINTS_TABLE: [i64; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

/// Points for a finishing position. Anything outside 1..=10 scores 0.
pub fn points_for(position: i64) -> i64 {
    if position < 1 {
        return 0;
    }
    usize::try_from(position - 1)
        .ok()
        .and_then(|idx| POINTS_TABLE.get(idx))
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_positions() {
        let expected = [(1, 25), (2, 18), (3, 15), (4, 12), (5, 10), (6, 8), (7, 6), (8, 4), (9, 2), (10, 1)];
        for (position, points) in expected {
            assert_eq!(points_for(position), points, "position {position}");
        }
    }

    #[test]
    fn test_outside_table_scores_zero() {
        for position in [0, -1, -25, 11, 12, 100, i64::MAX, i64::MIN] {
            assert_eq!(points_for(position), 0, "position {position}");
        }
    }
}
