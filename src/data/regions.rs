//! Department code → display name lookup.
//!
//! The 25 first-level administrative divisions of Peru, keyed by their
//! two-digit INEI code. Kept in ascending code order: synthetic generators
//! enumerate departments in this order before sorting.

/// Name returned for codes that are not in [`DEPARTMENTS`].
pub const UNKNOWN_DEPARTMENT: &str = "Unknown";

pub const DEPARTMENTS: [(&str, &str); 25] = [
    ("01", "Amazonas"),
    ("02", "Áncash"),
    ("03", "Apurímac"),
    ("04", "Arequipa"),
    ("05", "Ayacucho"),
    ("06", "Cajamarca"),
    ("07", "Callao"),
    ("08", "Cusco"),
    ("09", "Huancavelica"),
    ("10", "Huánuco"),
    ("11", "Ica"),
    ("12", "Junín"),
    ("13", "La Libertad"),
    ("14", "Lambayeque"),
    ("15", "Lima"),
    ("16", "Loreto"),
    ("17", "Madre de Dios"),
    ("18", "Moquegua"),
    ("19", "Pasco"),
    ("20", "Piura"),
    ("21", "Puno"),
    ("22", "San Martín"),
    ("23", "Tacna"),
    ("24", "Tumbes"),
    ("25", "Ucayali"),
];

/// Resolve a department code to its display name.
///
/// Matching is exact: `"1"` is not `"01"`. Unknown codes yield
/// [`UNKNOWN_DEPARTMENT`] rather than an error.
pub fn department_name(code: &str) -> &'static str {
    DEPARTMENTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_DEPARTMENT)
}
