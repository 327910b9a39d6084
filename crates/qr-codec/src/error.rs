/// The error type when the supplied byte payload does not fit any QR Code
/// version in the searched range at the requested error correction level.
///
/// Ways to handle this exception include:
///
/// - Decrease the error correction level if it was greater than `ErrorCorrectionLevel::Low`.
/// - Change the text to be shorter.
/// - Propagate the error upward to the caller/user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrError {
    /// The bit length the payload needed.
    pub data_bits: usize,
    /// The largest bit capacity available within the searched version range.
    pub max_capacity_bits: usize,
}

impl std::error::Error for QrError {}

impl std::fmt::Display for QrError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Data length = {} bits, Max capacity = {} bits",
            self.data_bits, self.max_capacity_bits
        )
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn display_reports_both_bit_counts() {
        let err = QrError {
            data_bits: 100,
            max_capacity_bits: 80,
        };
        assert_eq!("Data length = 100 bits, Max capacity = 80 bits", err.to_string());
    }

    #[test]
    fn implements_std_error() {
        fn assert_is_error<E: std::error::Error>(_: &E) {}
        let err = QrError {
            data_bits: 1,
            max_capacity_bits: 1,
        };
        assert_is_error(&err);
    }
}
