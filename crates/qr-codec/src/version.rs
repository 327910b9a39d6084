/// A QR Code version number, between 1 and 40 (inclusive).
///
/// Version v has a side length of `v*4 + 17` modules.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Version(u8);

impl Version {
    /// The smallest version defined by the standard.
    pub const MIN: Version = Version(1);

    /// The largest version defined by the standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// Panics if the number is outside the range [1, 40].
    pub fn new(ver: u8) -> Self {
        assert!(
            (Version::MIN.value()..=Version::MAX.value()).contains(&ver),
            "Version number out of range"
        );
        Self(ver)
    }

    /// Returns the value, which is in the range [1, 40].
    pub fn value(self) -> u8 {
        self.0
    }

    /// The module side length for this version: `value*4 + 17`.
    pub fn size(self) -> i32 {
        i32::from(self.0) * 4 + 17
    }
}
