//! Bounded scalar maximisation.

/// Number of samples in the bracketing scan.
const SCAN_SAMPLES: u32 = 64;

/// Inverse golden ratio.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Result of a bounded maximisation.
#[derive(Debug, Clone, Copy)]
pub struct Maximum {
    /// Argument of the maximum.
    pub x: f64,
    /// Objective value at `x`.
    pub value: f64,
    /// Golden-section iterations spent.
    pub iterations: usize,
}

/// Maximises `f` over `[lower, upper]`.
///
/// A uniform scan (plus the `seed`) brackets the best sample, then
/// golden-section refinement shrinks the bracket until it is narrower than
/// `tolerance`. Returns `None` if the bounds are invalid, the objective is
/// not finite at a visited point, or the bracket is still wider than
/// `tolerance` after `max_iterations`.
#[must_use]
pub fn maximize_bounded<F>(
    f: F,
    lower: f64,
    upper: f64,
    seed: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Option<Maximum>
where
    F: Fn(f64) -> f64,
{
    if !(lower.is_finite() && upper.is_finite()) || lower >= upper {
        return None;
    }

    let seed = seed.clamp(lower, upper);
    let mut best_x = seed;
    let mut best_value = f(seed);
    if !best_value.is_finite() {
        return None;
    }

    let step = (upper - lower) / f64::from(SCAN_SAMPLES);
    for i in 0..=SCAN_SAMPLES {
        let x = f64::from(i).mul_add(step, lower).min(upper);
        let value = f(x);
        if !value.is_finite() {
            return None;
        }
        if value > best_value {
            best_value = value;
            best_x = x;
        }
    }

    let mut lo = (best_x - step).max(lower);
    let mut hi = (best_x + step).min(upper);
    let mut c = hi - INV_PHI * (hi - lo);
    let mut d = lo + INV_PHI * (hi - lo);
    let mut fc = f(c);
    let mut fd = f(d);

    for iteration in 0..max_iterations {
        if !(fc.is_finite() && fd.is_finite()) {
            return None;
        }
        if hi - lo <= tolerance {
            let x = 0.5 * (lo + hi);
            let value = f(x);
            // Fall back to the best visited point on flat objectives.
            let (x, value) = if value >= best_value {
                (x, value)
            } else {
                (best_x, best_value)
            };
            return Some(Maximum {
                x,
                value,
                iterations: iteration,
            });
        }
        if fc > fd {
            hi = d;
            d = c;
            fd = fc;
            c = hi - INV_PHI * (hi - lo);
            fc = f(c);
        } else {
            lo = c;
            c = d;
            fc = fd;
            d = lo + INV_PHI * (hi - lo);
            fd = f(d);
        }
        if fc > best_value {
            best_value = fc;
            best_x = c;
        }
        if fd > best_value {
            best_value = fd;
            best_x = d;
        }
    }

    None
}
