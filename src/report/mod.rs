//! Reporting utilities: rounding, grouped means, rankings, and status output.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::PovertyRow;

pub mod format;

pub use format::*;

/// Round to `decimals` places, resolving exact ties to even.
///
/// Goes through Rust's exact decimal formatting so the result agrees with the
/// rounding used for the previously published map files. Non-finite values are
/// returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.prec$}", prec = decimals as usize)
        .parse()
        .unwrap_or(value)
}

/// Fraction in `[0, 1]` to a percentage with 1 decimal.
pub fn to_percent(fraction: f64) -> f64 {
    round_to(fraction * 100.0, 1)
}

/// Unweighted mean of the raw poverty fraction per department.
///
/// Groups come back in ascending code order.
pub fn mean_by_department(rows: &[PovertyRow]) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(row.department_code.as_str()).or_insert((0.0, 0));
        entry.0 += row.poverty_rate;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(code, (sum, n))| (code.to_string(), sum / n as f64))
        .collect()
}

/// Sort descending by `key`. The sort is stable, so ties keep their order.
pub fn sort_descending_by<T>(items: &mut [T], key: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
}
