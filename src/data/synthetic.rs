//! Deterministic department-level variation around a national nowcast.
//!
//! We do not have measured department series for GDP or inflation, so the map
//! shows the national figure shifted by a fixed per-department offset. The
//! offset is a pure function of the department code: MD5 of the code, first
//! 32 bits big-endian, modulo 100, scaled linearly onto a range.

use md5::{Digest, Md5};

use crate::data::regions::DEPARTMENTS;
use crate::report::round_to;

/// Half-open offset range `[low, low + span)` in percentage points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariationRange {
    pub low: f64,
    pub span: f64,
}

impl VariationRange {
    /// Year-over-year GDP growth: `[-2, 3)`.
    pub const GDP: VariationRange = VariationRange { low: -2.0, span: 5.0 };
    /// Month-over-month inflation: `[-0.2, 0.2)`.
    pub const INFLATION: VariationRange = VariationRange { low: -0.2, span: 0.4 };

    pub fn high(&self) -> f64 {
        self.low + self.span
    }

    /// Offset for a department code.
    pub fn offset(&self, code: &str) -> f64 {
        (hash_bucket(code) as f64 / 100.0) * self.span + self.low
    }
}

/// Stable bucket in `[0, 100)` for a department code.
pub fn hash_bucket(code: &str) -> u32 {
    let digest = Md5::digest(code.as_bytes());
    let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    prefix % 100
}

/// National value plus the department offset, rounded to `decimals`.
pub fn regional_value(national: f64, code: &str, range: VariationRange, decimals: u32) -> f64 {
    round_to(national + range.offset(code), decimals)
}

/// `(code, name, value)` for every known department, in code order.
pub fn regional_values(
    national: f64,
    range: VariationRange,
    decimals: u32,
) -> Vec<(&'static str, &'static str, f64)> {
    DEPARTMENTS
        .iter()
        .map(|&(code, name)| (code, name, regional_value(national, code, range, decimals)))
        .collect()
}
