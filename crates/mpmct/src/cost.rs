//! Asymptotic Clifford+T costs of a k-controlled NOT.
//!
//! Closed-form decompositions of an MPMCT with `k` controls into Clifford+T
//! primitives, valid for `k >= 4` where the ancilla-borrowing construction
//! applies. Below that threshold the linear fits go negative; callers must
//! use the exact small-gate rules instead (see [`crate::CostRule`]).

/// Circuit depth of a k-controlled NOT: `28k - 60`.
pub fn depth(controls: u32) -> u64 {
    debug_assert!(controls >= 4, "formula invalid for {controls} controls");
    28 * controls as u64 - 60
}

/// T-count of a k-controlled NOT, counting both T and T-dagger: `12k - 20`.
pub fn t_count(controls: u32) -> u64 {
    debug_assert!(controls >= 4, "formula invalid for {controls} controls");
    12 * controls as u64 - 20
}

/// T-depth of a k-controlled NOT: `4(k - 2)`.
pub fn t_depth(controls: u32) -> u64 {
    debug_assert!(controls >= 4, "formula invalid for {controls} controls");
    4 * (controls as u64 - 2)
}

/// Hadamard count of a k-controlled NOT: `4k - 6`.
pub fn h_count(controls: u32) -> u64 {
    debug_assert!(controls >= 4, "formula invalid for {controls} controls");
    4 * controls as u64 - 6
}

/// CNOT count of a k-controlled NOT: `24k - 40`.
pub fn cnot_count(controls: u32) -> u64 {
    debug_assert!(controls >= 4, "formula invalid for {controls} controls");
    24 * controls as u64 - 40
}
