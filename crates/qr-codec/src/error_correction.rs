/// The error correction level used by a QR Code symbol.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub enum ErrorCorrectionLevel {
    /// Tolerates about 7% erroneous codewords.
    Low,
    /// Tolerates about 15% erroneous codewords. Default level.
    #[default]
    Medium,
    /// Tolerates about 25% erroneous codewords.
    Quartile,
    /// Tolerates about 30% erroneous codewords.
    High,
}

impl ErrorCorrectionLevel {
    /// Index into the per-version block-layout tables; 0..=3.
    pub fn ordinal(self) -> usize {
        use ErrorCorrectionLevel::*;
        match self {
            Low => 0,
            Medium => 1,
            Quartile => 2,
            High => 3,
        }
    }

    /// The 2-bit EC indicator embedded in format information:
    /// L -> 01, M -> 00, Q -> 11, H -> 10.
    pub fn format_bits(self) -> u8 {
        use ErrorCorrectionLevel::*;
        match self {
            Low => 0b01,
            Medium => 0b00,
            Quartile => 0b11,
            High => 0b10,
        }
    }
}
