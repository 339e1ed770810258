//! Per-index fan-out shared by the smoother and the statistics pass.
//!
//! Every output element of these computations reads only from an immutable
//! input, so the work splits across indices without synchronization. With the
//! `parallel` feature the range is processed on the rayon pool; otherwise it
//! is a plain sequential map. Output order always matches the range order.
use std::ops::Range;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub(crate) fn map_range<T, F>(range: Range<usize>, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        range.into_par_iter().map(f).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        range.map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_preserves_order() {
        let out = map_range(3..8, |i| i * 10);

        assert_eq!(out, vec![30, 40, 50, 60, 70]);
    }

    #[test]
    fn map_range_handles_empty_range() {
        let out: Vec<usize> = map_range(2..2, |i| i);

        assert!(out.is_empty());
    }
}
