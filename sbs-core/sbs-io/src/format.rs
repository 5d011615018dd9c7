//! Integer and fixed-point formatting.
//!
//! All routines write through `core::fmt::Write`, one character at a time for
//! the binary and hexadecimal encodings, so they work on targets without a
//! heap and without `alloc::format!`.

use core::fmt::{self, Write};

/// Magnitude above which a double is reported as `"ovf"`.
///
/// Determined empirically; values past it would wrap when truncated to `u32`.
pub const FLOAT_OVERFLOW_BOUND: f64 = 4294967040.0;

/// Hexadecimal digits, most significant nibble value first.
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Integer encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntFormat {
    /// Base 10, narrowed to `i32`
    Decimal,
    /// One `0`/`1` per bit, MSB first
    Binary,
    /// One uppercase digit per nibble, MSB first
    Hexadecimal,
}

impl IntFormat {
    /// Convert to string representation
    pub fn as_str(self) -> &'static str {
        match self {
            IntFormat::Decimal => "decimal",
            IntFormat::Binary => "binary",
            IntFormat::Hexadecimal => "hexadecimal",
        }
    }

    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "decimal" | "dec" => Some(IntFormat::Decimal),
            "binary" | "bin" => Some(IntFormat::Binary),
            "hexadecimal" | "hex" => Some(IntFormat::Hexadecimal),
            _ => None,
        }
    }
}

impl Default for IntFormat {
    fn default() -> Self {
        IntFormat::Decimal
    }
}

impl fmt::Display for IntFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-width integer that can be rendered by [`write_int`].
pub trait FormatInt: Copy {
    /// Width of the type in bits
    const BITS: u32;

    /// Two's-complement bit pattern, zero-extended to 64 bits
    fn bit_pattern(self) -> u64;

    /// Value narrowed to `i32` for the decimal path
    ///
    /// 64-bit values and `u32` values above `i32::MAX` wrap. This is the
    /// documented precision boundary of decimal output.
    fn narrow(self) -> i32;
}

macro_rules! impl_format_int {
    ($($signed:ty => $unsigned:ty),* $(,)?) => {
        $(
            #[allow(trivial_numeric_casts, clippy::unnecessary_cast, reason = "shared by every width")]
            impl FormatInt for $signed {
                const BITS: u32 = <$signed>::BITS;

                fn bit_pattern(self) -> u64 {
                    self as $unsigned as u64
                }

                fn narrow(self) -> i32 {
                    self as i32
                }
            }

            #[allow(trivial_numeric_casts, clippy::unnecessary_cast, reason = "shared by every width")]
            impl FormatInt for $unsigned {
                const BITS: u32 = <$unsigned>::BITS;

                fn bit_pattern(self) -> u64 {
                    self as u64
                }

                fn narrow(self) -> i32 {
                    self as i32
                }
            }
        )*
    };
}

impl_format_int!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);

/// Write `value` as `T::BITS` binary digits, MSB first.
///
/// Signed values show their two's-complement pattern verbatim.
pub fn write_bits<T: FormatInt, W: Write + ?Sized>(out: &mut W, value: T) -> fmt::Result {
    let pattern = value.bit_pattern();
    let mut cursor = 1u64 << (T::BITS - 1);
    while cursor != 0 {
        out.write_char(if pattern & cursor != 0 { '1' } else { '0' })?;
        cursor >>= 1;
    }
    Ok(())
}

/// Write `value` as `T::BITS / 4` uppercase hex digits, MSB first.
pub fn write_hex<T: FormatInt, W: Write + ?Sized>(out: &mut W, value: T) -> fmt::Result {
    let pattern = value.bit_pattern();
    let mut shift = T::BITS;
    while shift != 0 {
        shift -= 4;
        let nibble = ((pattern >> shift) & 0xF) as usize;
        out.write_char(HEX_DIGITS[nibble] as char)?;
    }
    Ok(())
}

/// Write `value` in base 10 after narrowing it to `i32`.
pub fn write_decimal<T: FormatInt, W: Write + ?Sized>(out: &mut W, value: T) -> fmt::Result {
    write!(out, "{}", value.narrow())
}

/// Write `value` using the requested encoding.
pub fn write_int<T: FormatInt, W: Write + ?Sized>(
    out: &mut W,
    value: T,
    format: IntFormat,
) -> fmt::Result {
    match format {
        IntFormat::Binary => write_bits(out, value),
        IntFormat::Hexadecimal => write_hex(out, value),
        IntFormat::Decimal => write_decimal(out, value),
    }
}

/// Write `value` with exactly `digits` fractional digits.
///
/// `NaN` prints `nan`, infinities print `inf`, and anything beyond
/// [`FLOAT_OVERFLOW_BOUND`] prints `ovf`. Rounding adds half a unit of the
/// last shown digit before truncating, so `1.999` at two digits is `2.00`.
/// With `digits == 0` no decimal point is written.
pub fn write_double<W: Write + ?Sized>(out: &mut W, value: f64, digits: u8) -> fmt::Result {
    if value.is_nan() {
        return out.write_str("nan");
    }
    if value.is_infinite() {
        return out.write_str("inf");
    }
    if value > FLOAT_OVERFLOW_BOUND || value < -FLOAT_OVERFLOW_BOUND {
        return out.write_str("ovf");
    }

    let mut value = value;
    if value < 0.0 {
        out.write_char('-')?;
        value = -value;
    }

    let mut rounding = 0.5;
    for _ in 0..digits {
        rounding /= 10.0;
    }
    value += rounding;

    // The bound keeps this within u32. It goes out through the narrowing
    // decimal path, so parts above i32::MAX print negative.
    let int_part = value as u32;
    let mut remainder = value - int_part as f64;
    write_decimal(out, int_part)?;

    if digits > 0 {
        out.write_char('.')?;
    }
    for _ in 0..digits {
        remainder *= 10.0;
        let digit = remainder as u32;
        write!(out, "{digit}")?;
        remainder -= digit as f64;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn bits<T: FormatInt>(value: T) -> String {
        let mut s = String::new();
        write_bits(&mut s, value).unwrap();
        s
    }

    fn hex<T: FormatInt>(value: T) -> String {
        let mut s = String::new();
        write_hex(&mut s, value).unwrap();
        s
    }

    fn double(value: f64, digits: u8) -> String {
        let mut s = String::new();
        write_double(&mut s, value, digits).unwrap();
        s
    }

    #[test]
    fn test_bits_width_and_pattern() {
        assert_eq!(bits(5u8), "00000101");
        assert_eq!(bits(-1i8), "11111111");
        assert_eq!(bits(0x8001u16), "1000000000000001");
        assert_eq!(bits(i32::MIN).len(), 32);
        assert!(bits(i32::MIN).starts_with('1'));
        assert_eq!(bits(u64::MAX), "1".repeat(64));
        assert_eq!(bits(0i64), "0".repeat(64));
    }

    #[test]
    fn test_bits_matches_core_binary() {
        for value in [0u16, 1, 2, 0x00FF, 0xABCD, u16::MAX] {
            assert_eq!(bits(value), alloc::format!("{value:016b}"));
        }
        for value in [0i32, -2, 7, i32::MAX, -123456] {
            assert_eq!(bits(value), alloc::format!("{:032b}", value as u32));
        }
    }

    #[test]
    fn test_hex_width_and_digits() {
        assert_eq!(hex(0xAu8), "0A");
        assert_eq!(hex(-1i16), "FFFF");
        assert_eq!(hex(0xDEADBEEFu32), "DEADBEEF");
        assert_eq!(hex(0x0123456789ABCDEFu64), "0123456789ABCDEF");
        assert_eq!(hex(i64::MIN), "8000000000000000");
    }

    #[test]
    fn test_decimal_narrows_to_i32() {
        let mut s = String::new();
        write_int(&mut s, -42i8, IntFormat::Decimal).unwrap();
        assert_eq!(s, "-42");

        s.clear();
        write_int(&mut s, 255u8, IntFormat::Decimal).unwrap();
        assert_eq!(s, "255");

        s.clear();
        write_int(&mut s, 0x1_0000_0005u64, IntFormat::Decimal).unwrap();
        assert_eq!(s, "5");

        s.clear();
        write_int(&mut s, u32::MAX, IntFormat::Decimal).unwrap();
        assert_eq!(s, "-1");
    }

    #[test]
    fn test_double_rounding_carries() {
        assert_eq!(double(1.999, 2), "2.00");
        assert_eq!(double(3.14159, 3), "3.142");
        assert_eq!(double(0.5, 1), "0.5");
        assert_eq!(double(12.0, 1), "12.0");
    }

    #[test]
    fn test_double_negative_keeps_sign() {
        assert_eq!(double(-0.004, 2), "-0.00");
        assert_eq!(double(-2.5, 0), "-3");
        assert_eq!(double(-1.25, 2), "-1.25");
    }

    #[test]
    fn test_double_sentinels() {
        assert_eq!(double(f64::NAN, 2), "nan");
        assert_eq!(double(f64::INFINITY, 2), "inf");
        assert_eq!(double(f64::NEG_INFINITY, 0), "inf");
        for digits in [0, 1, 5] {
            assert_eq!(double(5e9, digits), "ovf");
            assert_eq!(double(-5e9, digits), "ovf");
        }
    }

    #[test]
    fn test_double_zero_digits_has_no_point() {
        for value in [0.0, 0.4, 0.6, 1.5, -7.49, 123456.789, 4294967000.0] {
            assert!(!double(value, 0).contains('.'), "{value}");
        }
        assert_eq!(double(2.6, 0), "3");
    }

    #[test]
    fn test_double_integer_part_narrows_like_decimal() {
        let mut decimal = String::new();
        write_decimal(&mut decimal, 3000000000u32).unwrap();
        assert_eq!(double(3000000000.0, 0), decimal);
        assert_eq!(double(3000000000.0, 0), "-1294967296");
        assert_eq!(double(2147483647.0, 0), "2147483647");
        assert_eq!(double(-3000000000.0, 1), "--1294967296.0");
    }

    #[test]
    fn test_double_at_overflow_bound() {
        assert_eq!(double(FLOAT_OVERFLOW_BOUND, 0), "-256");
        assert_eq!(double(FLOAT_OVERFLOW_BOUND + 1.0, 0), "ovf");
        assert_eq!(double(-(FLOAT_OVERFLOW_BOUND + 1.0), 2), "ovf");
    }

    #[test]
    fn test_int_format_from_str() {
        assert_eq!(IntFormat::from_str("hex"), Some(IntFormat::Hexadecimal));
        assert_eq!(IntFormat::from_str("binary"), Some(IntFormat::Binary));
        assert_eq!(IntFormat::from_str("octal"), None);
        assert_eq!(IntFormat::default().as_str(), "decimal");
    }
}
