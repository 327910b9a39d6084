//! Generates QR Code symbols from UTF-8 text payloads.
//!
//! This crate implements the full ISO/IEC 18004 Model 2 encoding pipeline —
//! version selection, byte-mode bit stream assembly, Reed-Solomon error
//! correction over GF(256), block interleaving, function-pattern matrix
//! construction, zig-zag data placement, 8-way mask scoring, and BCH-encoded
//! format/version information — entirely in terms of the standard's own
//! arithmetic, with no third-party dependency.
//!
//! # Scope
//!
//! Byte mode only: every payload is treated as UTF-8 bytes. Numeric mode,
//! alphanumeric mode, Kanji mode, structured append, Micro QR, ECI, and
//! decoding are all out of scope; see each module's doc comment for the
//! stage it implements.
//!
//! The output is a plain grid of dark/light modules (no quiet zone). Turning
//! that grid into a bitmap, SVG, or anything else a screen or printer can use
//! is a job for a caller-supplied renderer.
//!
//! # Example
//!
//! ```
//! use qr_codec::{generate_qr, ErrorCorrectionLevel};
//!
//! let qr = generate_qr("https://example.com", ErrorCorrectionLevel::Medium).unwrap();
//! for y in 0..qr.size {
//!     for x in 0..qr.size {
//!         let _dark: bool = qr.get_module(x, y);
//!         // ... paint a dark or light rectangle ...
//!     }
//! }
//! ```

mod bit_buffer;
mod data_encoder;
mod error;
mod error_correction;
mod finder_penalty;
mod gf256;
mod mask;
mod qr_code;
mod reed_solomon;
mod tables;
mod version;

pub use error::QrError;
pub use error_correction::ErrorCorrectionLevel;
pub use mask::Mask;
pub use qr_code::QrCode;
pub use version::Version;

/*---- Penalty-scoring weights (spec section 4.8) ----*/

// For use in QrCode's internal mask-scoring pass, when evaluating which of
// the 8 masks is best.
pub const PENALTY_N1: i32 = 3;
pub const PENALTY_N2: i32 = 3;
pub const PENALTY_N3: i32 = 40;
pub const PENALTY_N4: i32 = 10;

/// Encodes `text` at the given error correction level and returns the
/// resulting module grid, or `None` if the input can't be encoded.
///
/// This is the crate's primary entry point. It always searches the full
/// version range (1..=40), never boosts the requested EC level, and lets
/// the encoder automatically choose the lowest-penalty mask. Callers who
/// need a restricted version range, a forced mask, or EC-level boosting
/// should use [`QrCode::encode_bytes_advanced`] directly.
///
/// Returns `None` when:
/// - `text` is empty, or
/// - the UTF-8 byte length of `text` exceeds what version 40 can hold at
///   the requested `level`.
pub fn generate_qr(text: &str, level: ErrorCorrectionLevel) -> Option<QrCode> {
    if text.is_empty() {
        return None;
    }
    QrCode::encode_text(text, level).ok()
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn reject_empty_input() {
        assert!(generate_qr("", ErrorCorrectionLevel::Medium).is_none());
    }

    #[test]
    fn reject_payload_too_large_for_version_forty() {
        let text = "A".repeat(10_000);
        assert!(generate_qr(&text, ErrorCorrectionLevel::High).is_none());
    }

    #[test]
    fn single_digit_yields_version_one() {
        let qr = generate_qr("1", ErrorCorrectionLevel::Medium).unwrap();
        assert_eq!(1, qr.version.value());
        assert_eq!(21, qr.size);
    }

    #[test]
    fn short_word_yields_version_one_or_two() {
        let qr = generate_qr("hello world", ErrorCorrectionLevel::Medium).unwrap();
        assert!(qr.size == 21 || qr.size == 25);
    }

    #[test]
    fn url_round_trips_through_the_grid_invariants() {
        let qr = generate_qr("https://example.com", ErrorCorrectionLevel::Medium).unwrap();
        assert_eq!(i32::from(qr.version.value()) * 4 + 17, qr.size);
    }

    #[test]
    fn every_ec_level_produces_a_grid_reporting_its_own_level() {
        for level in [
            ErrorCorrectionLevel::Low,
            ErrorCorrectionLevel::Medium,
            ErrorCorrectionLevel::Quartile,
            ErrorCorrectionLevel::High,
        ] {
            let qr = generate_qr("hello world", level).unwrap();
            assert_eq!(level, qr.error_correction_level);
        }
    }

    #[test]
    fn size_is_always_in_range_for_every_version() {
        for v in 1..=40u8 {
            let ver = Version::new(v);
            assert!((21..=177).contains(&ver.size()));
        }
    }

    #[test]
    fn generate_qr_is_deterministic() {
        let a = generate_qr("hello world", ErrorCorrectionLevel::Medium).unwrap();
        let b = generate_qr("hello world", ErrorCorrectionLevel::Medium).unwrap();
        assert_eq!(a.modules, b.modules);
        assert_eq!(a.version, b.version);
        assert_eq!(a.mask, b.mask);
    }
}
