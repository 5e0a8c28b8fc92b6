//! Input-format configuration.

/// Selects how fixed-length hex/binary literals are interpreted.
///
/// In the IEEE-754 modes, a hex literal of exactly 8 (respectively 16)
/// digits, or a binary literal of exactly 32 (64) digits, is decoded as a
/// raw bit pattern instead of an integer. Every other literal decodes the
/// same in all three modes.
///
/// The format is threaded explicitly into [`evaluate`](crate::evaluate) and
/// the [`Calc`](crate::Calc) builder; there is no global state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// All literals are integers/floats in their suffix-implied base
    #[default]
    Normal,
    /// Full-width 32-bit hex/binary literals are binary32 bit patterns
    Ieee754_32,
    /// Full-width 64-bit hex/binary literals are binary64 bit patterns
    Ieee754_64,
}
