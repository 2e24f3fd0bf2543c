//! Byte literal formatting.
//!
//! Each byte becomes a Go hex literal `0xHH` with two lowercase digits.
//! Literals on a line are separated by `, ` and the last one is followed by
//! `,\n`, which keeps the trailing comma Go requires before a closing brace
//! on its own line.

/// Lowercase hexadecimal digits
const HEX_TABLE: &[u8; 16] = b"0123456789abcdef";

/// Indentation unit for body and declaration lines
pub const INDENT_UNIT: u8 = b'\t';

/// Width of one formatted literal including its separator: `0xHH, `
pub const LITERAL_WIDTH: usize = 6;

/// Returns the two lowercase hex digits for `byte`
#[inline]
pub fn hex_digits(byte: u8) -> [u8; 2] {
    [
        HEX_TABLE[(byte >> 4) as usize],
        HEX_TABLE[(byte & 0x0f) as usize],
    ]
}

/// Appends one complete body line for `chunk` to `line`.
///
/// `chunk` must not be empty.
pub fn push_line(line: &mut Vec<u8>, chunk: &[u8], indent: usize) {
    debug_assert!(!chunk.is_empty(), "empty chunks produce no line");

    line.reserve(indent + chunk.len() * LITERAL_WIDTH);
    line.extend(std::iter::repeat(INDENT_UNIT).take(indent));

    let last = chunk.len() - 1;
    for (i, &byte) in chunk.iter().enumerate() {
        let [hi, lo] = hex_digits(byte);
        line.extend_from_slice(&[b'0', b'x', hi, lo, b',']);
        line.push(if i == last { b'\n' } else { b' ' });
    }
}

/// Parses the literals of one body line back into bytes.
///
/// Returns `None` if the line holds anything other than `0xHH` literals.
pub fn parse_line(line: &str) -> Option<Vec<u8>> {
    line.trim()
        .split(',')
        .map(str::trim)
        .filter(|literal| !literal.is_empty())
        .map(|literal| {
            let digits = literal.strip_prefix("0x")?;
            if digits.len() != 2 || !digits.bytes().all(is_lower_hex) {
                return None;
            }
            u8::from_str_radix(digits, 16).ok()
        })
        .collect()
}

fn is_lower_hex(b: u8) -> bool {
    b.is_ascii_digit() || (b'a'..=b'f').contains(&b)
}
