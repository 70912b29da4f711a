//! Static reference data and synthetic department variation.

pub mod regions;
pub mod synthetic;

pub use regions::{DEPARTMENTS, UNKNOWN_DEPARTMENT, department_name};
pub use synthetic::{VariationRange, hash_bucket, regional_value, regional_values};
