//! Property-based tests for the stage invariants.
//!
//! Purpose
//! -------
//! - Check the universally quantified guarantees of the numeric stages on
//!   arbitrary finite series: identity at radius 0, length and index-range
//!   preservation, bounded salt, reproducible salting, and smoothed values
//!   staying inside the input range.
use pssg::{
    classify::{ShapeLabel, classify},
    salt::salt,
    series::{Series, compute_statistics},
    smooth::{smooth, smooth_passes},
};
use proptest::prelude::*;

fn finite_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e3..1.0e3f64, 1..120)
}

fn shape_label() -> impl Strategy<Value = ShapeLabel> {
    prop_oneof![
        Just(ShapeLabel::Trend),
        Just(ShapeLabel::Random),
        (0usize..30).prop_map(|lag| ShapeLabel::Cyclic { lag }),
    ]
}

proptest! {
    #[test]
    fn smooth_radius_zero_is_identity(values in finite_values()) {
        let series = Series::new(values).unwrap();

        let smoothed = smooth(&series, 0).unwrap();

        prop_assert_eq!(smoothed.to_vec(), series.to_vec());
    }

    #[test]
    fn smooth_preserves_length_and_stays_in_range(values in finite_values(), radius in 0i64..40, passes in 1usize..4) {
        let series = Series::new(values).unwrap();
        let stats = compute_statistics(&series);

        let smoothed = smooth_passes(&series, radius, passes).unwrap();

        prop_assert_eq!(smoothed.index_range(), series.index_range());
        let tol = 1e-9 * stats.range().max(1.0);
        for (_, v) in smoothed.iter() {
            prop_assert!(v >= stats.min() - tol && v <= stats.max() + tol);
        }
    }

    #[test]
    fn salt_is_reproducible_and_bounded(
        values in finite_values(),
        label in shape_label(),
        intensity in 0.0..=1.0f64,
        seed in any::<u64>(),
    ) {
        let series = Series::new(values).unwrap();
        let amplitude = intensity * compute_statistics(&series).std_dev();

        let first = salt(&series, label, intensity, seed).unwrap();
        let second = salt(&series, label, intensity, seed).unwrap();

        prop_assert_eq!(first.to_vec(), second.to_vec());
        prop_assert_eq!(first.len(), series.len());
        let bound = 1.25 * amplitude * (1.0 + 1e-12) + 1e-9;
        for ((_, raw), (_, salted)) in series.iter().zip(first.iter()) {
            prop_assert!((salted - raw).abs() <= bound);
        }
    }

    #[test]
    fn strictly_increasing_series_is_trend(start in -100.0..100.0f64, steps in prop::collection::vec(0.01..5.0f64, 9..80)) {
        let values: Vec<f64> = steps
            .iter()
            .scan(start, |acc, step| {
                *acc += step;
                Some(*acc)
            })
            .collect();
        let series = Series::new(values).unwrap();

        prop_assert_eq!(classify(&series), ShapeLabel::Trend);
    }
}
