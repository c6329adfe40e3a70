//! Net-weight and per-40 billing quantity computation

/// Net weight of a weighing pair: absolute difference, symmetric in the
/// two readings.
pub fn final_weight(first: f64, second: f64) -> f64 {
    (first - second).abs()
}

/// Format a net weight as the per-40 billing quantity.
///
/// The quantity is whole units of 40 plus a sub-unit remainder out of 40,
/// concatenated as `"whole.remainder"`. This is a mixed-radix display
/// format, not a decimal fraction: 85 kg is 2 units + 5/40 and renders as
/// `"2.5"`; 150 kg renders as `"3.30"`. Exactly divisible weights render
/// with no suffix. The remainder rounds half away from zero, matching the
/// original terminal.
pub fn weight_per_forty(final_weight: f64) -> String {
    let q = final_weight / 40.0;
    let whole = q.floor();
    let frac = q - whole;

    if frac == 0.0 {
        format!("{}", whole as i64)
    } else {
        format!("{}.{}", whole as i64, (frac * 40.0).round() as i64)
    }
}

/// Both derived fields for a weighing pair
pub fn derived(first: f64, second: f64) -> (f64, String) {
    let net = final_weight(first, second);
    (net, weight_per_forty(net))
}
