use std::sync::OnceLock;

/// The number of arrangements of a 3x3 block of cells
const ARRANGEMENTS: usize = 1 << 9;

/// Bit of the center cell in a row-major 3x3 block
pub(super) const CENTER: usize = 0b000_010_000;

type RuleTable = [bool; ARRANGEMENTS];

/// Returns the shared B3/S23 lookup table
///
/// Equivalent to calling [`build_rule_table`] once and storing the result
pub(super) fn rule_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(build_rule_table)
}

/// Builds the lookup table for Conway's rule
///
/// The table is indexed by a 9-bit block where bit `i` is the `i`-th cell
/// of the row-major 3x3 neighborhood (see [`crate::Pos2::neighborhood`]).
/// Each entry is the next state of the center cell:
///
/// - alive with fewer than 2 live neighbors dies
/// - alive with 2 or 3 live neighbors survives
/// - alive with more than 3 live neighbors dies
/// - dead with exactly 3 live neighbors is born
pub(super) fn build_rule_table() -> RuleTable {
    let mut table = [false; ARRANGEMENTS];
    for (block, next) in table.iter_mut().enumerate() {
        *next = matches!(
            (block & CENTER != 0, neighbor_count(block)),
            (true, 2 | 3) | (false, 3)
        );
    }
    table
}

/// Number of live neighbors in a 3x3 block, excluding the center
#[inline]
pub(super) fn neighbor_count(block: usize) -> u32 {
    (block & !CENTER).count_ones()
}
