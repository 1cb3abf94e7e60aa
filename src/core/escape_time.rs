use crate::core::data::complex::Complex;
use crate::core::data::sample::PixelSample;

/// Escape radius squared: the orbit has certainly diverged once |z|² > 4.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z = z² + c` from `z = 0` until the orbit escapes the radius-2
/// disc or the iteration budget is spent.
///
/// This is the numeric hot path: no allocation, no branching beyond the
/// loop condition. A point that survives the full budget is reported as
/// non-escaping (inside or near the set).
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> PixelSample {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while iterations < max_iterations && z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED {
        z = z * z + c;
        iterations += 1;
    }

    PixelSample {
        iterations,
        escaped: iterations < max_iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_interior_point_never_escapes() {
        // The default view centre sits inside the set.
        let sample = escape_time(Complex { re: -0.75, im: 0.0 }, 100);

        assert_eq!(sample.iterations, 100);
        assert!(!sample.escaped);
    }

    #[test]
    fn test_origin_never_escapes() {
        let sample = escape_time(Complex::ZERO, 100);

        assert_eq!(sample.iterations, 100);
        assert!(!sample.escaped);
    }

    #[test]
    fn test_far_exterior_point_escapes_immediately() {
        // (2, 2) is already outside radius 2 after the first step.
        let sample = escape_time(Complex { re: 2.0, im: 2.0 }, 100);

        assert!(sample.escaped);
        assert!(sample.iterations <= 1);
    }

    #[test]
    fn test_boundary_adjacent_point_escapes_late() {
        let sample = escape_time(
            Complex {
                re: -0.7453,
                im: 0.1127,
            },
            1000,
        );

        assert!(sample.escaped);
        assert!(sample.iterations > 10);
    }

    #[test]
    fn test_iterations_never_exceed_budget() {
        for budget in [1, 2, 10, 100] {
            let sample = escape_time(Complex { re: 0.3, im: 0.5 }, budget);

            assert!(sample.iterations <= budget);
        }
    }

    #[test]
    fn test_escaped_matches_iteration_count() {
        let budget = 50;
        let exterior = escape_time(Complex { re: 0.4, im: 0.6 }, budget);
        let interior = escape_time(Complex { re: -0.1, im: 0.1 }, budget);

        assert_eq!(exterior.escaped, exterior.iterations < budget);
        assert_eq!(interior.escaped, interior.iterations < budget);
    }
}
