//! Rounding helpers for the report's money and share columns.
//!
//! [`round2`] is plain 2-decimal rounding. [`distribute_rounding`] rounds a
//! whole vector so its sum lands exactly on a target, which is what keeps the
//! share column summing to 100.00 despite independent rounding error.

/// Round to 2 decimal places, half away from zero.
///
/// This is `f64::round` scaled to cents. Note the tie behavior: 0.125 rounds
/// to 0.13, -0.125 to -0.13.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round `values` to `precision` decimal places so they sum exactly to
/// `target` (largest-remainder method).
///
/// Every value is first rounded down at the chosen precision. The leftover
/// units needed to reach the target are then handed out one by one to the
/// entries with the largest fractional remainder, ties broken by original
/// position. If the floored values overshoot the target, units are taken
/// back from the entries with the smallest remainder instead.
pub fn distribute_rounding(values: &[f64], precision: u32, target: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let scale = 10f64.powi(precision as i32);
    let mut units: Vec<i64> = Vec::with_capacity(values.len());
    let mut remainders: Vec<f64> = Vec::with_capacity(values.len());
    for &value in values {
        let scaled = value * scale;
        let floored = scaled.floor();
        units.push(floored as i64);
        remainders.push(scaled - floored);
    }

    let target_units = (target * scale).round() as i64;
    let mut missing = target_units - units.iter().sum::<i64>();

    if missing != 0 {
        let mut order: Vec<usize> = (0..values.len()).collect();
        if missing > 0 {
            // hand out units to the largest remainders first
            order.sort_by(|&a, &b| remainders[b].total_cmp(&remainders[a]).then(a.cmp(&b)));
        } else {
            // take units back from the smallest remainders first
            order.sort_by(|&a, &b| remainders[a].total_cmp(&remainders[b]).then(a.cmp(&b)));
        }
        let step = missing.signum();
        let mut cursor = 0;
        while missing != 0 {
            units[order[cursor % order.len()]] += step;
            missing -= step;
            cursor += 1;
        }
    }

    units.into_iter().map(|u| u as f64 / scale).collect()
}
