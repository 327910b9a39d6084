//! Byte-mode payload assembly (spec section 4.4). Numeric, alphanumeric,
//! Kanji and ECI modes are explicit non-goals, so this module only ever
//! emits the byte-mode indicator `0100`.

use crate::bit_buffer::BitBuffer;
use crate::version::Version;

/// The 4-bit byte-mode indicator, per ISO/IEC 18004 table 2.
const MODE_INDICATOR: u32 = 0b0100;

/// Width of the character-count indicator for byte mode at the given
/// version: 8 bits for v <= 9, 16 bits for v >= 10.
pub fn char_count_bits(ver: Version) -> u8 {
    if ver.value() <= 9 {
        8
    } else {
        16
    }
}

/// Total bits a byte-mode segment carrying `payload_len` bytes needs at the
/// given version: mode indicator + character count + payload bits.
pub fn bits_needed(payload_len: usize, ver: Version) -> usize {
    4 + usize::from(char_count_bits(ver)) + payload_len * 8
}

/// Assembles the data codeword bytes for `payload` at `ver`, given the
/// data capacity in bits for that version/EC level: mode indicator,
/// character count, payload, terminator, bit padding, then alternating
/// pad codewords until the capacity is reached exactly.
///
/// `payload.len()` must already have been checked to fit `capacity_bits`
/// via [`bits_needed`].
pub fn build_data_codewords(payload: &[u8], ver: Version, capacity_bits: usize) -> Vec<u8> {
    let mut bb = BitBuffer(Vec::with_capacity(capacity_bits));
    bb.append_bits(MODE_INDICATOR, 4);
    bb.append_bits(payload.len() as u32, char_count_bits(ver));
    for &byte in payload {
        bb.append_bits(u32::from(byte), 8);
    }

    debug_assert!(bb.0.len() <= capacity_bits);

    // Terminator: up to 4 zero bits, truncated if capacity is almost exhausted.
    let terminator_bits = std::cmp::min(4, capacity_bits - bb.0.len());
    bb.append_bits(0, terminator_bits as u8);

    // Pad with zero bits to the next byte boundary.
    let pad_to_byte = bb.0.len().wrapping_neg() & 7;
    bb.append_bits(0, pad_to_byte as u8);
    debug_assert_eq!(bb.0.len() % 8, 0);

    // Alternating pad codewords until the capacity is filled.
    for &pad_byte in [0xECu8, 0x11].iter().cycle() {
        if bb.0.len() >= capacity_bits {
            break;
        }
        bb.append_bits(u32::from(pad_byte), 8);
    }

    let mut codewords = vec![0u8; bb.0.len() / 8];
    for (i, &bit) in bb.0.iter().enumerate() {
        codewords[i >> 3] |= u8::from(bit) << (7 - (i & 7));
    }
    codewords
}
