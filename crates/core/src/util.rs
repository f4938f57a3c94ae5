/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took at the given level (debug by default),
/// and evaluates to the value of the expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} µs", $label, elapsed.as_micros());
        value
    }};
}

/// Calculate the number of tiles within `radius` steps of a center tile,
/// including the center. Radius 0 means 1 tile, 1 is 7 tiles, 2 is 19, etc.
/// Saturates at `usize::MAX` for huge radii.
pub fn range_len(radius: u32) -> usize {
    // We'll always have 3r^2+3r+1 tiles (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r tiles for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    r.saturating_mul(r)
        .saturating_add(r)
        .saturating_mul(3)
        .saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hex;

    #[test]
    fn test_range_len() {
        assert_eq!(range_len(0), 1);
        assert_eq!(range_len(1), 7);
        assert_eq!(range_len(2), 19);
        assert_eq!(range_len(3), 37);
        for radius in 0..10 {
            assert_eq!(Hex::ORIGIN.within(radius).count(), range_len(radius));
        }
        assert_eq!(range_len(u32::MAX), usize::MAX);
    }

    #[test]
    fn test_timed() {
        let value = timed!("Adding", 1 + 2);
        assert_eq!(value, 3);
    }
}
