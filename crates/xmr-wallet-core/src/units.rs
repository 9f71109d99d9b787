//! Conversion between atomic units and display units.

/// Number of atomic units in one XMR.
pub const ATOMIC_UNITS_PER_COIN: u64 = 1_000_000_000_000;

/// Convert an atomic-unit amount into decimal XMR.
///
/// Plain floating-point division, no rounding.
pub fn atomic_to_coin(atomic: u64) -> f64 {
    atomic as f64 / ATOMIC_UNITS_PER_COIN as f64
}
