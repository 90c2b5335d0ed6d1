//! Evenly spaced value generation.

/// Generate `count` evenly spaced values from `start` towards `stop`.
///
/// With `endpoint` set, both bounds appear in the output and the step
/// divisor is `count - 1`; otherwise `stop` is excluded and the divisor
/// is `count`. The endpoint is written back exactly rather than left to
/// accumulated rounding.
pub fn linspace(start: f64, stop: f64, count: usize, endpoint: bool) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start];
    }

    let divisor = if endpoint { count - 1 } else { count };
    let step = (stop - start) / divisor as f64;

    let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    if endpoint {
        values[count - 1] = stop;
    }
    values
}
