//! Millimetre ↔ internal-unit conversion.
//!
//! The host's internal length unit is the decimal foot. Upstream
//! collaborators (command parsing, firm standards) speak millimetres;
//! everything inside the engine is internal units.

/// Millimetres per internal unit (one foot).
pub const MM_PER_INTERNAL_UNIT: f64 = 304.8;

/// Converts millimetres to internal units.
#[inline]
#[must_use]
pub fn mm_to_internal(mm: f64) -> f64 {
    mm / MM_PER_INTERNAL_UNIT
}

/// Converts internal units to millimetres.
#[inline]
#[must_use]
pub fn internal_to_mm(internal: f64) -> f64 {
    internal * MM_PER_INTERNAL_UNIT
}
