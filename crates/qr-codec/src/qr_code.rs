use crate::bit_buffer::get_bit;
use crate::data_encoder;
use crate::error::QrError;
use crate::error_correction::ErrorCorrectionLevel;
use crate::finder_penalty::FinderPenalty;
use crate::mask;
use crate::mask::Mask;
use crate::reed_solomon;
use crate::tables;
use crate::version::Version;
use crate::{PENALTY_N1, PENALTY_N2, PENALTY_N3, PENALTY_N4};

/// A QR Code symbol, which is a type of two-dimension barcode.
///
/// Invented by Denso Wave and described in the ISO/IEC 18004 standard.
///
/// Instances of this struct represent an immutable square grid of dark and light cells.
/// The impl provides static factory functions to create a QR Code from a UTF-8 text payload.
/// The struct and impl cover the QR Code Model 2 specification for all versions (sizes)
/// from 1 to 40 and all 4 error correction levels, using byte mode exclusively (numeric,
/// alphanumeric, Kanji and ECI segment modes are out of scope).
///
/// Ways to create a QR Code object:
///
/// - High level: call `QrCode::encode_text()` with the payload and a requested EC level.
/// - Mid level: call `QrCode::encode_bytes_advanced()` to control the searched version
///   range, request an explicit mask, or allow the EC level to be boosted.
/// - Low level: supply pre-assembled data codeword bytes (including the mode indicator,
///   character count, terminator, and padding, but excluding error correction codewords)
///   and call `QrCode::encode_codewords()` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    // The version number of this QR Code, which is between 1 and 40 (inclusive).
    // This determines the size of this barcode.
    pub version: Version,

    // The width and height of this QR Code, measured in modules, between
    // 21 and 177 (inclusive). This is equal to version * 4 + 17.
    pub size: i32,

    // The error correction level used in this QR Code.
    pub error_correction_level: ErrorCorrectionLevel,

    // The index of the mask pattern used in this QR Code, which is between 0 and 7 (inclusive).
    // Even if a QR Code is created with automatic masking requested (mask = None),
    // the resulting object still has a mask value between 0 and 7.
    pub mask: Mask,

    // The modules of this QR Code (false = light, true = dark), dimensions size*size.
    // Immutable after the constructor finishes. Accessed through get_module().
    pub modules: Vec<bool>,

    // Marks function modules (not subject to masking). Discarded when the constructor finishes.
    is_function: Vec<bool>,
}

impl QrCode {
    /*---- Static factory functions (high level) ----*/

    /// Returns a QR Code representing the given UTF-8 text string at the given error
    /// correction level, scanning the full version range and auto-selecting the mask.
    ///
    /// Returns `Err` if the data is too long to fit in any version at the given EC level.
    pub fn encode_text(text: &str, ecl: ErrorCorrectionLevel) -> Result<Self, QrError> {
        QrCode::encode_bytes_advanced(text.as_bytes(), ecl, Version::MIN, Version::MAX, None, false)
    }

    /*---- Static factory functions (mid level) ----*/

    /// Returns a QR Code representing `data` (byte mode only) with the given encoding
    /// parameters.
    ///
    /// The smallest possible QR Code version within `minversion..=maxversion` is
    /// automatically chosen. Iff `boost_ecl` is true, the EC level of the result may be
    /// higher than `ecl` if that can be done without increasing the version. `mask` is
    /// either a forced mask pattern, or `None` to automatically evaluate all 8 and
    /// select the one with the lowest penalty score.
    ///
    /// Returns `Err` if the data is too long to fit in any version in the given range
    /// at the given EC level.
    pub fn encode_bytes_advanced(
        data: &[u8],
        mut ecl: ErrorCorrectionLevel,
        minversion: Version,
        maxversion: Version,
        mask: Option<Mask>,
        boost_ecl: bool,
    ) -> Result<Self, QrError> {
        assert!(minversion <= maxversion, "Invalid value");

        // Find the minimal version number that fits the payload.
        let mut version: Version = minversion;
        let data_used_bits: usize = loop {
            let capacity_bits: usize = QrCode::get_num_data_codewords(version, ecl) * 8;
            let needed_bits: usize = data_encoder::bits_needed(data.len(), version);
            if needed_bits <= capacity_bits {
                break needed_bits;
            } else if version >= maxversion {
                return Err(QrError {
                    data_bits: needed_bits,
                    max_capacity_bits: capacity_bits,
                });
            } else {
                version = Version::new(version.value() + 1);
            }
        };

        // Increase the error correction level while the data still fits in the current version.
        for &candidate in &[
            ErrorCorrectionLevel::Medium,
            ErrorCorrectionLevel::Quartile,
            ErrorCorrectionLevel::High,
        ] {
            if boost_ecl && data_used_bits <= QrCode::get_num_data_codewords(version, candidate) * 8
            {
                ecl = candidate;
            }
        }

        let capacity_bits: usize = QrCode::get_num_data_codewords(version, ecl) * 8;
        let datacodewords = data_encoder::build_data_codewords(data, version, capacity_bits);
        Ok(QrCode::encode_codewords(version, ecl, &datacodewords, mask))
    }

    /*---- Constructor (low level) ----*/

    /// Creates a new QR Code with the given version number, error correction level,
    /// data codeword bytes (already padded to the version/EC level's data capacity),
    /// and mask number.
    ///
    /// This is a low-level API that most callers should not use directly; prefer
    /// `encode_text()` or `encode_bytes_advanced()`.
    pub fn encode_codewords(
        ver: Version,
        ecl: ErrorCorrectionLevel,
        datacodewords: &[u8],
        mut msk: Option<Mask>,
    ) -> Self {
        // Initialize fields
        let size = usize::from(ver.value()) * 4 + 17;
        let mut result = Self {
            version: ver,
            size: size as i32,
            mask: Mask::new(0), // Dummy value
            error_correction_level: ecl,
            modules: vec![false; size * size], // Initially all light
            is_function: vec![false; size * size],
        };

        // Compute ECC, interleave, and draw the codeword bit stream (plus remainder bits).
        result.draw_function_patterns();
        let allcodewords: Vec<u8> = result.add_ecc_and_interleave(datacodewords);
        let mut bits: Vec<bool> = codewords_to_bits(&allcodewords);
        bits.extend(std::iter::repeat(false).take(usize::from(tables::remainder_bits(ver))));
        result.draw_codeword_bits(&bits);

        // Do masking
        if msk.is_none() {
            // Automatically choose best mask
            let mut minpenalty = std::i32::MAX;
            for i in 0u8..8 {
                let i = Mask::new(i);
                result.apply_mask(i);
                result.draw_format_bits(i);
                let penalty: i32 = result.get_penalty_score();
                if penalty < minpenalty {
                    msk = Some(i);
                    minpenalty = penalty;
                }
                result.apply_mask(i); // Undoes the mask due to XOR
            }
        }
        let msk: Mask = msk.unwrap();
        result.mask = msk;
        result.apply_mask(msk); // Apply the final choice of mask
        result.draw_format_bits(msk); // Overwrite old format bits

        result.is_function.clear();
        result.is_function.shrink_to_fit();
        result
    }

    /*---- Public methods ----*/

    /// Returns this QR Code's version, in the range [1, 40].
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns this QR Code's size, in the range [21, 177].
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns this QR Code's error correction level.
    pub fn error_correction_level(&self) -> ErrorCorrectionLevel {
        self.error_correction_level
    }

    /// Returns this QR Code's mask, in the range [0, 7].
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Returns the color of the module (pixel) at the given coordinates,
    /// which is `false` for light or `true` for dark.
    ///
    /// The top left corner has the coordinates (x=0, y=0). If the given
    /// coordinates are out of bounds, then `false` (light) is returned.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        (0..self.size).contains(&x) && (0..self.size).contains(&y) && self.module(x, y)
    }

    // Returns the color of the module at the given coordinates, which must be in bounds.
    fn module(&self, x: i32, y: i32) -> bool {
        self.modules[(y * self.size + x) as usize]
    }

    // Returns a mutable reference to the module's color at the given coordinates, which must be in bounds.
    fn module_mut(&mut self, x: i32, y: i32) -> &mut bool {
        &mut self.modules[(y * self.size + x) as usize]
    }

    /*---- Private helper methods for constructor: Drawing function modules ----*/

    // Reads this object's version field, and draws and marks all function modules.
    fn draw_function_patterns(&mut self) {
        // Draw horizontal and vertical timing patterns
        let size: i32 = self.size;
        for i in 0..size {
            self.set_function_module(6, i, i % 2 == 0);
            self.set_function_module(i, 6, i % 2 == 0);
        }

        // Draw 3 finder patterns (all corners except bottom right; overwrites some timing modules)
        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(size - 4, 3);
        self.draw_finder_pattern(3, size - 4);

        // Draw numerous alignment patterns
        let alignpatpos: Vec<i32> = tables::alignment_pattern_positions(self.version);
        let numalign: usize = alignpatpos.len();
        for i in 0..numalign {
            for j in 0..numalign {
                // Don't draw on the three finder corners
                if !(i == 0 && j == 0 || i == 0 && j == numalign - 1 || i == numalign - 1 && j == 0)
                {
                    self.draw_alignment_pattern(alignpatpos[i], alignpatpos[j]);
                }
            }
        }

        // Draw configuration data
        self.draw_format_bits(Mask::new(0)); // Dummy mask value; overwritten later in the constructor
        self.draw_version();
    }

    // Draws two copies of the format bits (with its own error correction code)
    // based on the given mask and this object's error correction level field.
    fn draw_format_bits(&mut self, mask: Mask) {
        // Calculate error correction code and pack bits
        let bits: u32 = {
            // errcorrlvl is uint2, mask is uint3
            let data: u32 =
                u32::from(self.error_correction_level.format_bits() << 3 | mask.value());
            let mut rem: u32 = data;
            for _ in 0..10 {
                rem = (rem << 1) ^ ((rem >> 9) * 0x537);
            }
            (data << 10 | rem) ^ 0x5412 // uint15
        };
        debug_assert_eq!(bits >> 15, 0);

        // Draw first copy
        for i in 0..6 {
            self.set_function_module(8, i, get_bit(bits, i));
        }
        self.set_function_module(8, 7, get_bit(bits, 6));
        self.set_function_module(8, 8, get_bit(bits, 7));
        self.set_function_module(7, 8, get_bit(bits, 8));
        for i in 9..15 {
            self.set_function_module(14 - i, 8, get_bit(bits, i));
        }

        // Draw second copy
        let size: i32 = self.size;
        for i in 0..8 {
            self.set_function_module(size - 1 - i, 8, get_bit(bits, i));
        }
        for i in 8..15 {
            self.set_function_module(8, size - 15 + i, get_bit(bits, i));
        }
        self.set_function_module(8, size - 8, true); // Always dark
    }

    // Draws two copies of the version bits (with its own error correction code),
    // based on this object's version field, iff 7 <= version <= 40.
    fn draw_version(&mut self) {
        if self.version.value() < 7 {
            return;
        }

        // Calculate error correction code and pack bits
        let bits: u32 = {
            let data = u32::from(self.version.value()); // uint6, in the range [7, 40]
            let mut rem: u32 = data;
            for _ in 0..12 {
                rem = (rem << 1) ^ ((rem >> 11) * 0x1F25);
            }
            data << 12 | rem // uint18
        };
        debug_assert_eq!(bits >> 18, 0);

        // Draw two copies
        for i in 0..18 {
            let bit: bool = get_bit(bits, i);
            let a: i32 = self.size - 11 + i % 3;
            let b: i32 = i / 3;
            self.set_function_module(a, b, bit);
            self.set_function_module(b, a, bit);
        }
    }

    // Draws a 9*9 finder pattern including the border separator,
    // with the center module at (x, y). Modules can be out of bounds.
    fn draw_finder_pattern(&mut self, x: i32, y: i32) {
        for dy in -4..=4 {
            for dx in -4..=4 {
                let xx: i32 = x + dx;
                let yy: i32 = y + dy;
                if (0..self.size).contains(&xx) && (0..self.size).contains(&yy) {
                    let dist: i32 = std::cmp::max(dx.abs(), dy.abs()); // Chebyshev/infinity norm
                    self.set_function_module(xx, yy, dist != 2 && dist != 4);
                }
            }
        }
    }

    // Draws a 5*5 alignment pattern, with the center module
    // at (x, y). All modules must be in bounds.
    fn draw_alignment_pattern(&mut self, x: i32, y: i32) {
        for dy in -2..=2 {
            for dx in -2..=2 {
                self.set_function_module(x + dx, y + dy, std::cmp::max(dx.abs(), dy.abs()) != 1);
            }
        }
    }

    // Sets the color of a module and marks it as a function module.
    // Only used by the constructor. Coordinates must be in bounds.
    fn set_function_module(&mut self, x: i32, y: i32, isdark: bool) {
        *self.module_mut(x, y) = isdark;
        self.is_function[(y * self.size + x) as usize] = true;
    }

    /*---- Private helper methods for constructor: Codewords and masking ----*/

    // Returns a new byte string representing the given data with the appropriate error correction
    // codewords appended to it, based on this object's version and error correction level.
    fn add_ecc_and_interleave(&self, data: &[u8]) -> Vec<u8> {
        let ver: Version = self.version;
        let ecl: ErrorCorrectionLevel = self.error_correction_level;
        assert_eq!(
            data.len(),
            QrCode::get_num_data_codewords(ver, ecl),
            "Illegal argument"
        );

        // Calculate parameter numbers
        let numblocks: usize =
            tables::block_table_get(&tables::NUM_ERROR_CORRECTION_BLOCKS, ver, ecl.ordinal());
        let blockecclen: usize =
            tables::block_table_get(&tables::ECC_CODEWORDS_PER_BLOCK, ver, ecl.ordinal());
        let rawcodewords: usize = QrCode::get_num_raw_data_modules(ver) / 8;
        let numshortblocks: usize = numblocks - rawcodewords % numblocks;
        let shortblocklen: usize = rawcodewords / numblocks;

        // Split data into blocks and append ECC to each block
        let mut blocks = Vec::<Vec<u8>>::with_capacity(numblocks);
        let generator: Vec<u8> = reed_solomon::generator_polynomial(blockecclen);
        let mut k: usize = 0;
        for i in 0..numblocks {
            let datlen: usize = shortblocklen - blockecclen + usize::from(i >= numshortblocks);
            let dat = &data[k..k + datlen];
            k += datlen;
            let ecc: Vec<u8> = reed_solomon::encode(dat, &generator);
            let mut block = dat.to_vec();
            if i < numshortblocks {
                block.push(0);
            }
            block.extend_from_slice(&ecc);
            blocks.push(block);
        }

        // Interleave (not concatenate) the bytes from every block into a single sequence
        let mut result = Vec::<u8>::with_capacity(rawcodewords);
        for i in 0..=shortblocklen {
            for (j, block) in blocks.iter().enumerate() {
                // Skip the padding byte in short blocks
                if i != shortblocklen - blockecclen || j >= numshortblocks {
                    result.push(block[i]);
                }
            }
        }
        result
    }

    // Draws the given bit stream (interleaved data + EC codewords, plus trailing
    // remainder bits) onto the entire data area of this QR Code using the canonical
    // right-to-left zig-zag ordering. Function modules must be marked off first.
    fn draw_codeword_bits(&mut self, bits: &[bool]) {
        let mut i: usize = 0; // Bit index into the data
        let mut right: i32 = self.size - 1;
        while right >= 1 {
            // Index of right column in each column pair
            if right == 6 {
                right = 5;
            }
            for vert in 0..self.size {
                // Vertical counter
                for j in 0..2 {
                    let x: i32 = right - j; // Actual x coordinate
                    let upward: bool = (right + 1) & 2 == 0;
                    let y: i32 = if upward { self.size - 1 - vert } else { vert }; // Actual y coordinate
                    if !self.is_function[(y * self.size + x) as usize] && i < bits.len() {
                        *self.module_mut(x, y) = bits[i];
                        i += 1;
                    }
                    // Any unwritten cells (remainder bits included) stay light, as
                    // initialized by the constructor.
                }
            }
            right -= 2;
        }
        debug_assert_eq!(i, bits.len());
    }

    // XORs the codeword modules in this QR Code with the given mask pattern.
    // The function modules must be marked and the codeword bits must be drawn
    // before masking. Due to the arithmetic of XOR, calling apply_mask() with
    // the same mask value a second time will undo the mask. A final well-formed
    // QR Code needs exactly one (not zero, two, etc.) mask applied.
    fn apply_mask(&mut self, msk: Mask) {
        for y in 0..self.size {
            for x in 0..self.size {
                let invert: bool = mask::applies(msk, y, x);
                *self.module_mut(x, y) ^= invert & !self.is_function[(y * self.size + x) as usize];
            }
        }
    }

    // Calculates and returns the penalty score based on state of this QR Code's current modules.
    // This is used by the automatic mask choice algorithm to find the mask pattern that yields the lowest score.
    fn get_penalty_score(&self) -> i32 {
        let mut result: i32 = 0;
        let size: i32 = self.size;

        // Adjacent modules in row having same color, and finder-like patterns
        for y in 0..size {
            let mut runcolor = false;
            let mut runx: i32 = 0;
            let mut runhistory = FinderPenalty::new(size);
            for x in 0..size {
                if self.module(x, y) == runcolor {
                    runx += 1;
                    if runx == 5 {
                        result += PENALTY_N1;
                    } else if runx > 5 {
                        result += 1;
                    }
                } else {
                    runhistory.add_history(runx);
                    if !runcolor {
                        result += runhistory.count_patterns() * PENALTY_N3;
                    }
                    runcolor = self.module(x, y);
                    runx = 1;
                }
            }
            result += runhistory.terminate_and_count(runcolor, runx) * PENALTY_N3;
        }
        // Adjacent modules in column having same color, and finder-like patterns
        for x in 0..size {
            let mut runcolor = false;
            let mut runy: i32 = 0;
            let mut runhistory = FinderPenalty::new(size);
            for y in 0..size {
                if self.module(x, y) == runcolor {
                    runy += 1;
                    if runy == 5 {
                        result += PENALTY_N1;
                    } else if runy > 5 {
                        result += 1;
                    }
                } else {
                    runhistory.add_history(runy);
                    if !runcolor {
                        result += runhistory.count_patterns() * PENALTY_N3;
                    }
                    runcolor = self.module(x, y);
                    runy = 1;
                }
            }
            result += runhistory.terminate_and_count(runcolor, runy) * PENALTY_N3;
        }

        // 2*2 blocks of modules having same color
        for y in 0..size - 1 {
            for x in 0..size - 1 {
                let color: bool = self.module(x, y);
                if color == self.module(x + 1, y)
                    && color == self.module(x, y + 1)
                    && color == self.module(x + 1, y + 1)
                {
                    result += PENALTY_N2;
                }
            }
        }

        // Balance of dark and light modules
        let dark: i32 = self.modules.iter().copied().map(i32::from).sum();
        let total: i32 = size * size; // Note that size is odd, so dark/total != 1/2
                                      // Compute the smallest integer k >= 0 such that (45-5k)% <= dark/total <= (55+5k)%
        let k: i32 = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
        debug_assert!(0 <= k && k <= 9);
        result += k * PENALTY_N4;
        debug_assert!(0 <= result && result <= 2568888); // Non-tight upper bound based on default values of PENALTY_N1, ..., N4
        result
    }

    /*---- Private helper functions ----*/

    // Returns the number of data bits that can be stored in a QR Code of the given version number, after
    // all function modules are excluded. This includes remainder bits, so it might not be a multiple of 8.
    // The result is in the range [208, 29648]. This could be implemented as a 40-entry lookup table.
    fn get_num_raw_data_modules(ver: Version) -> usize {
        let ver = usize::from(ver.value());
        let mut result: usize = (16 * ver + 128) * ver + 64;
        if ver >= 2 {
            let numalign: usize = ver / 7 + 2;
            result -= (25 * numalign - 10) * numalign - 55;
            if ver >= 7 {
                result -= 36;
            }
        }
        debug_assert!((208..=29648).contains(&result));
        result
    }

    // Returns the number of 8-bit data (i.e. not error correction) codewords contained in any
    // QR Code of the given version number and error correction level, with remainder bits discarded.
    fn get_num_data_codewords(ver: Version, ecl: ErrorCorrectionLevel) -> usize {
        QrCode::get_num_raw_data_modules(ver) / 8
            - tables::block_table_get(&tables::ECC_CODEWORDS_PER_BLOCK, ver, ecl.ordinal())
                * tables::block_table_get(&tables::NUM_ERROR_CORRECTION_BLOCKS, ver, ecl.ordinal())
    }
}

// Converts a byte string into its bits, MSB-first.
fn codewords_to_bits(codewords: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(codewords.len() * 8);
    for &b in codewords {
        for i in (0..8).rev() {
            bits.push(get_bit(u32::from(b), i));
        }
    }
    bits
}

#[cfg(test)]
mod should {
    use super::*;

    fn finder_is_canonical(qr: &QrCode, top_left_x: i32, top_left_y: i32) -> bool {
        const SHAPE: [[bool; 7]; 7] = [
            [true, true, true, true, true, true, true],
            [true, false, false, false, false, false, true],
            [true, false, true, true, true, false, true],
            [true, false, true, true, true, false, true],
            [true, false, true, true, true, false, true],
            [true, false, false, false, false, false, true],
            [true, true, true, true, true, true, true],
        ];
        for (dy, row) in SHAPE.iter().enumerate() {
            for (dx, &expected) in row.iter().enumerate() {
                if qr.get_module(top_left_x + dx as i32, top_left_y + dy as i32) != expected {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn encode_text_version_one_for_single_digit() {
        let qr = QrCode::encode_text("1", ErrorCorrectionLevel::Medium).unwrap();
        assert_eq!(1, qr.version().value());
        assert_eq!(21, qr.size());
    }

    #[test]
    fn encode_text_chooses_smallest_fitting_version() {
        let qr = QrCode::encode_text("hello world", ErrorCorrectionLevel::Medium).unwrap();
        assert!(qr.version().value() == 1 || qr.version().value() == 2);
    }

    #[test]
    fn encode_text_long_payload_reaches_version_info_threshold() {
        let text = "The quick brown fox jumps over the lazy dog. 0123456789 ABCDEFGHIJKLMNOP";
        let qr = QrCode::encode_text(text, ErrorCorrectionLevel::Medium).unwrap();
        assert!(qr.version().value() >= 7);
    }

    #[test]
    fn encode_text_rejects_payload_too_large_for_version_forty() {
        let text = "A".repeat(10_000);
        let result = QrCode::encode_text(&text, ErrorCorrectionLevel::High);
        assert!(result.is_err());
    }

    #[test]
    fn every_level_produces_a_scannable_symbol_for_hello_world() {
        for level in [
            ErrorCorrectionLevel::Low,
            ErrorCorrectionLevel::Medium,
            ErrorCorrectionLevel::Quartile,
            ErrorCorrectionLevel::High,
        ] {
            let qr = QrCode::encode_text("hello world", level).unwrap();
            assert_eq!(level, qr.error_correction_level());
        }
    }

    #[test]
    fn dark_module_is_always_set() {
        for text in ["1", "hello world", "https://example.com"] {
            let qr = QrCode::encode_text(text, ErrorCorrectionLevel::Medium).unwrap();
            assert!(qr.get_module(8, qr.size() - 8));
        }
    }

    #[test]
    fn finder_patterns_are_byte_identical_to_canonical_shape() {
        let qr = QrCode::encode_text("https://example.com", ErrorCorrectionLevel::Quartile).unwrap();
        let size = qr.size();
        assert!(finder_is_canonical(&qr, 0, 0));
        assert!(finder_is_canonical(&qr, size - 7, 0));
        assert!(finder_is_canonical(&qr, 0, size - 7));
    }

    #[test]
    fn encoded_size_matches_version_formula_for_every_version() {
        // Force each version by handing encode_bytes_advanced a fixed minversion,
        // then check the returned grid side length against size = version*4 + 17.
        for v in 1..=40u8 {
            let ver = Version::new(v);
            let qr = QrCode::encode_bytes_advanced(
                b"x",
                ErrorCorrectionLevel::Low,
                ver,
                ver,
                None,
                false,
            )
            .unwrap();
            assert_eq!(ver, qr.version());
            assert_eq!(i32::from(v) * 4 + 17, qr.size());
        }
    }

    #[test]
    fn mask_override_is_honored() {
        let qr = QrCode::encode_bytes_advanced(
            b"hello world",
            ErrorCorrectionLevel::Medium,
            Version::MIN,
            Version::MAX,
            Some(Mask::new(3)),
            false,
        )
        .unwrap();
        assert_eq!(3, qr.mask().value());
    }

    #[test]
    fn boost_ecl_upgrades_when_it_fits_without_growing_the_version() {
        // A 2-byte payload fits version 1 at every EC level, so a boosted encode
        // should walk all the way up to High rather than staying at the requested Low.
        let qr = QrCode::encode_bytes_advanced(
            b"hi",
            ErrorCorrectionLevel::Low,
            Version::MIN,
            Version::MAX,
            None,
            true,
        )
        .unwrap();
        assert_eq!(1, qr.version().value());
        assert_eq!(ErrorCorrectionLevel::High, qr.error_correction_level());
    }

    #[test]
    fn boost_ecl_false_keeps_the_requested_level() {
        let qr = QrCode::encode_bytes_advanced(
            b"hi",
            ErrorCorrectionLevel::Low,
            Version::MIN,
            Version::MAX,
            None,
            false,
        )
        .unwrap();
        assert_eq!(ErrorCorrectionLevel::Low, qr.error_correction_level());
    }

    #[test]
    fn version_info_decodes_to_actual_version_for_v7_plus() {
        let text = "The quick brown fox jumps over the lazy dog. 0123456789 ABCDEFGHIJKLMNOP";
        let qr = QrCode::encode_text(text, ErrorCorrectionLevel::Medium).unwrap();
        assert!(qr.version().value() >= 7);

        let size = qr.size();
        // Read the top-right 18-bit version info block back out of the grid
        // (mirrors the (x = i/3, y = size-11+i%3) coordinates draw_version() uses).
        let mut bits: u32 = 0;
        for i in 0..18 {
            let x = i / 3;
            let y = size - 11 + i % 3;
            if qr.get_module(x, y) {
                bits |= 1 << i;
            }
        }
        let decoded_version = bits >> 12;
        assert_eq!(u32::from(qr.version().value()), decoded_version);
    }

    #[test]
    fn format_info_decodes_to_requested_ec_level_and_selected_mask() {
        let qr = QrCode::encode_text("hello world", ErrorCorrectionLevel::Quartile).unwrap();
        let size = qr.size();

        // Read the vertical copy of the 15-bit format info back out of the grid.
        let mut bits: u32 = 0;
        for i in 0..6 {
            if qr.get_module(8, i) {
                bits |= 1 << i;
            }
        }
        if qr.get_module(8, 7) {
            bits |= 1 << 6;
        }
        if qr.get_module(8, 8) {
            bits |= 1 << 7;
        }
        if qr.get_module(7, 8) {
            bits |= 1 << 8;
        }
        for i in 9..15 {
            if qr.get_module(14 - i, 8) {
                bits |= 1 << i;
            }
        }

        let unmasked = bits ^ 0x5412;
        let data = unmasked >> 10;
        let ecl_bits = (data >> 3) as u8;
        let mask_bits = (data & 0b111) as u8;
        assert_eq!(qr.error_correction_level().format_bits(), ecl_bits);
        assert_eq!(qr.mask().value(), mask_bits);
    }
}
