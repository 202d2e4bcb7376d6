//! Ordered category threshold tables
//!
//! A table lists `(lower_bound, category)` pairs in ascending order. Each
//! entry owns the half-open interval from its lower bound up to the next
//! entry's lower bound; the last entry is unbounded above.

/// One row of a threshold table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryThreshold<C> {
    pub lower_bound: f64,
    pub category: C,
}

impl<C> CategoryThreshold<C> {
    pub const fn new(lower_bound: f64, category: C) -> Self {
        Self {
            lower_bound,
            category,
        }
    }
}

/// Classify a value against an ascending threshold table
///
/// Values below the first lower bound (and NaN) fall into the first row.
/// The table must not be empty.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn classify<C: Copy>(table: &[CategoryThreshold<C>], value: f64) -> C {
    let mut current = table[0].category;
    for row in &table[1..] {
        // Negated so NaN stops at the first row
        if !(value >= row.lower_bound) {
            break;
        }
        current = row.category;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TABLE: [CategoryThreshold<u8>; 3] = [
        CategoryThreshold::new(f64::NEG_INFINITY, 0),
        CategoryThreshold::new(10.0, 1),
        CategoryThreshold::new(20.0, 2),
    ];

    #[test]
    fn test_lower_bound_is_inclusive() {
        assert_eq!(classify(&TABLE, 9.999), 0);
        assert_eq!(classify(&TABLE, 10.0), 1);
        assert_eq!(classify(&TABLE, 19.999), 1);
        assert_eq!(classify(&TABLE, 20.0), 2);
        assert_eq!(classify(&TABLE, 1e9), 2);
    }

    #[test]
    fn test_nan_falls_into_first_row() {
        assert_eq!(classify(&TABLE, f64::NAN), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: classification is monotonic in the value
        #[test]
        fn prop_classify_monotonic(a in -100.0f64..100.0, b in -100.0f64..100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify(&TABLE, lo) <= classify(&TABLE, hi));
        }
    }
}
