// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Decimal-to-double parsing with correct rounding.
//!
//! Reads one numeric token (`sign? (digits ('.' digits?)? | '.' digits)
//! (('e'|'E') sign? digits)? | 'inf' | 'nan'`, literals case-insensitive)
//! from a byte cursor and produces an IEEE-754 double:
//!
//! - **Fast path** — ≤15 significant digits and a decimal exponent within
//!   ±22: one native multiply or divide against an exact `10^k` table, which
//!   is a single correctly rounded operation.
//! - **Slow path** — scale the leading 19 digits by `10^e` in 128-bit
//!   normalized arithmetic ([`crate::bigreal`]) and assemble the double
//!   directly from the result's mantissa and exponent, rounding to nearest
//!   with ties to even.
//!
//! Inputs with more than 19 significant digits are rounded on the 19-digit
//! prefix (the remaining digits only shift the exponent), which is exact for
//! every shortest-round-trip representation. Behavior on text outside the
//! grammar is unspecified but never panics.

use crate::bigreal::{pow5mult, BigReal, DECIMAL_EXP_CLAMP};

/// Exact powers of ten: every entry through `10^22` is a precise double.
const TENS: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

const INF_BITS: u64 = 0x7ff0_0000_0000_0000;
const NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

/// Cursor over an in-memory byte buffer.
///
/// The parser consumes exactly one numeric token and leaves the cursor on the
/// first byte after it.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Starts a cursor at the beginning of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, wanted: &[u8]) -> bool {
        for &w in wanted {
            match self.peek() {
                Some(c) if c.eq_ignore_ascii_case(&w) => self.bump(),
                _ => return false,
            }
        }
        true
    }
}

/// The parsed shape of one decimal token before binary conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalNumber {
    /// First (up to) 19 significant digits, as an integer.
    pub y: u64,
    /// Decimal exponent applying to `y`'s last digit.
    pub e: i16,
    /// Sign bit.
    pub neg: bool,
    /// Total significant digits seen.
    pub nd: i32,
    /// Significant digits before the decimal point; −1 when no point.
    pub nd0: i32,
    kind: TokenKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum TokenKind {
    #[default]
    Number,
    Infinity,
    NotANumber,
}

#[inline]
fn digit(c: u8) -> Option<u64> {
    if c.is_ascii_digit() {
        Some(u64::from(c - b'0'))
    } else {
        None
    }
}

/// Tokenizes one decimal number starting at the cursor.
pub fn tokenize(reader: &mut ByteReader<'_>) -> DecimalNumber {
    let mut out = DecimalNumber {
        nd0: -1,
        ..DecimalNumber::default()
    };

    match reader.peek() {
        Some(b'-') => {
            out.neg = true;
            reader.bump();
        }
        Some(b'+') => reader.bump(),
        _ => {}
    }

    match reader.peek() {
        Some(b'i' | b'I') => {
            if reader.eat(b"inf") {
                out.kind = TokenKind::Infinity;
            }
            return out;
        }
        Some(b'n' | b'N') => {
            if reader.eat(b"nan") {
                out.kind = TokenKind::NotANumber;
            }
            return out;
        }
        _ => {}
    }

    // Leading integer zeros carry no information.
    while reader.peek() == Some(b'0') {
        reader.bump();
    }

    let mut nd = 0i32;
    let mut zeros = 0i32;

    if reader.peek() == Some(b'.') && out.nd0 < 0 {
        // Point reached with no significant integer digit.
        out.nd0 = 0;
        reader.bump();
        while reader.peek() == Some(b'0') {
            reader.bump();
            zeros += 1;
        }
    } else {
        while let Some(d) = reader.peek().and_then(digit) {
            if nd < 19 {
                out.y = out.y * 10 + d;
            }
            nd += 1;
            reader.bump();
        }
        if reader.peek() == Some(b'.') {
            out.nd0 = nd;
            reader.bump();
        }
    }

    while let Some(d) = reader.peek().and_then(digit) {
        if nd < 19 {
            out.y = out.y * 10 + d;
        }
        nd += 1;
        reader.bump();
    }

    out.nd = nd;
    let mut exp = if out.nd0 >= 0 {
        out.nd0 - nd - zeros
    } else {
        0
    };

    if matches!(reader.peek(), Some(b'e' | b'E')) {
        reader.bump();
        let mut eneg = false;
        match reader.peek() {
            Some(b'-') => {
                eneg = true;
                reader.bump();
            }
            Some(b'+') => reader.bump(),
            _ => {}
        }
        let mut acc = 0i32;
        while let Some(d) = reader.peek().and_then(digit) {
            #[allow(clippy::cast_possible_truncation)]
            {
                acc = (acc * 10 + d as i32).min(10_000);
            }
            reader.bump();
        }
        exp += if eneg { -acc } else { acc };
    }

    #[allow(clippy::cast_possible_truncation)]
    {
        out.e = exp.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
    }
    out
}

/// Assembles a double from a normalized big real, rounding to nearest with
/// ties to even; overflow clamps to the signed infinity, underflow is
/// gradual down to the signed zero.
fn assemble_f64(r: BigReal, neg: bool) -> f64 {
    let sign = u64::from(neg) << 63;
    if r.pow() > 1024 {
        return f64::from_bits(INF_BITS | sign);
    }
    let exp = r.pow() - 1;
    let shift = 11 + if exp < -1022 { -1022 - exp } else { 0 };
    let exp = exp.max(-1023);

    let value = r.value();
    let cut = 64 + shift; // bits of `value` dropped below the mantissa
    let (kept, guard, sticky) = if cut >= 129 {
        (0u64, false, value != 0 || !r.is_exact())
    } else if cut == 128 {
        (0u64, value >> 127 != 0, value << 1 != 0 || !r.is_exact())
    } else {
        #[allow(clippy::cast_possible_truncation)]
        let kept = (value >> cut) as u64;
        let guard = value >> (cut - 1) & 1 != 0;
        let sticky = value & ((1 << (cut - 1)) - 1) != 0 || !r.is_exact();
        (kept, guard, sticky)
    };

    #[allow(clippy::cast_sign_loss)]
    let exp_word = 0x3ff0_0000u64.wrapping_add((exp as u64) << 20) & 0xffff_ffff;
    let mut bits = (kept & 0xf_ffff_ffff_ffff) | exp_word << 32;
    if guard && (sticky || bits & 1 != 0) {
        // Mantissa overflow carries into the exponent field, which is the
        // correct promotion (and reaches infinity at the very top).
        bits += 1;
    }
    f64::from_bits(bits | sign)
}

/// Converts a tokenized decimal into a double.
pub fn decimal_to_f64(token: &DecimalNumber) -> f64 {
    let sign = u64::from(token.neg) << 63;
    match token.kind {
        TokenKind::Infinity => return f64::from_bits(INF_BITS | sign),
        TokenKind::NotANumber => return f64::from_bits(NAN_BITS | sign),
        TokenKind::Number => {}
    }
    if token.y == 0 {
        return f64::from_bits(sign);
    }

    let e = i32::from(token.e);
    if token.nd <= 15 && (-22..=22).contains(&e) {
        // One correctly rounded native operation: y is exact in a double
        // (≤15 digits) and the table entry is an exact power of ten.
        #[allow(clippy::cast_precision_loss)]
        let d = token.y as f64;
        let scaled = if e >= 0 {
            d * TENS[e.unsigned_abs() as usize]
        } else {
            d / TENS[e.unsigned_abs() as usize]
        };
        return if token.neg { -scaled } else { scaled };
    }

    let e_eff = e + (token.nd - 19).max(0);
    let e_eff = e_eff.clamp(-DECIMAL_EXP_CLAMP, DECIMAL_EXP_CLAMP);
    assemble_f64(pow5mult(token.y, e_eff), token.neg)
}

/// Parses one decimal token from the cursor into a double.
///
/// # Examples
/// ```
/// use echo_dmath::parse::{parse_decimal_f64, ByteReader};
///
/// let mut r = ByteReader::new(b"-0.5, more");
/// assert_eq!(parse_decimal_f64(&mut r), -0.5);
/// assert_eq!(r.pos(), 4);
/// ```
pub fn parse_decimal_f64(reader: &mut ByteReader<'_>) -> f64 {
    let token = tokenize(reader);
    decimal_to_f64(&token)
}

/// Parses a whole string as one decimal token.
pub fn parse_decimal_str(s: &str) -> f64 {
    parse_decimal_f64(&mut ByteReader::new(s.as_bytes()))
}
