//! Fixed per-version/per-EC-level data from ISO/IEC 18004: block layout,
//! remainder-bit counts, and alignment-pattern centre positions.

use crate::version::Version;

/// Number of EC codewords per block, indexed `[ec_level.ordinal()][version]`.
/// Index 0 of the inner array is unused padding (versions are 1-based).
pub static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    //0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

/// Number of error-correction blocks, indexed `[ec_level.ordinal()][version]`.
pub static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    //0, 1, 2, 3, 4, 5, 6, 7, 8, 9,10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Count of zero bits appended after the interleaved codeword stream, by
/// version (index 0 is version 1). Equal to `raw_data_modules(version) % 8`.
pub static REM_BITS: [u8; 40] = [
    0, 7, 7, 7, 7, 7, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 3, 3,
    3, 3, 0, 0, 0, 0, 0, 0,
];

/// Returns an entry from a `[[i8; 41]; 4]` layout table for the given
/// version and EC level.
pub fn block_table_get(table: &'static [[i8; 41]; 4], ver: Version, ecl_ordinal: usize) -> usize {
    table[ecl_ordinal][usize::from(ver.value())] as usize
}

/// Returns the remainder-bit count for the given version (spec section 4.5).
pub fn remainder_bits(ver: Version) -> u8 {
    REM_BITS[usize::from(ver.value()) - 1]
}

/// Returns an ascending list of alignment-pattern centre positions for this
/// version (used on both the row and column axes). Empty for version 1.
///
/// Computed by formula rather than stored as a literal per-version table;
/// both representations are equally valid per spec section 9.
pub fn alignment_pattern_positions(ver: Version) -> Vec<i32> {
    let v = ver.value();
    if v == 1 {
        return vec![];
    }
    let size = ver.size();
    let numalign = i32::from(v) / 7 + 2;
    let step: i32 = if v == 32 {
        26
    } else {
        (i32::from(v) * 4 + numalign * 2 + 1) / (numalign * 2 - 2) * 2
    };
    let mut result: Vec<i32> = (0..numalign - 1).map(|i| size - 7 - i * step).collect();
    result.push(6);
    result.reverse();
    result
}
