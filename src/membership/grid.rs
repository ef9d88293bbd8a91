//! Text rendering of a filter's bit array

use core::fmt::{self, Write};

/// Bytes rendered per row
const BYTES_PER_ROW: usize = 8;

/// Plain-text view of a bit array, 8 bytes per row, each byte MSB first
///
/// # Example
///
/// ```
/// use murmurbloom::membership::BloomFilter;
///
/// let mut bloom = BloomFilter::new(1, 0.5).unwrap();
/// bloom.insert("a").unwrap();
/// let rendered = bloom.grid().to_string();
/// assert!(rendered.contains("(3 Bytes Array)"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BitGrid<'a> {
    bits: &'a [u8],
    inserted: u64,
    expected: u64,
}

impl<'a> BitGrid<'a> {
    /// Wrap a raw bit array with the counts shown in the header
    pub fn new(bits: &'a [u8], inserted: u64, expected: u64) -> Self {
        Self {
            bits,
            inserted,
            expected,
        }
    }

    /// Number of body rows
    pub fn rows(&self) -> usize {
        self.bits.len().div_ceil(BYTES_PER_ROW)
    }

    fn write_header(&self, f: &mut impl Write) -> fmt::Result {
        write!(
            f,
            "============[ Bloom Filter Grid View | ({} Bytes Array) | Elements ({} / {}) ]============",
            self.bits.len(),
            self.inserted,
            self.expected
        )
    }
}

/// Counts characters instead of storing them
struct Width(usize);

impl Write for Width {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.chars().count();
        Ok(())
    }
}

impl fmt::Display for BitGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        f.write_str("\n\n")?;

        for row in self.bits.chunks(BYTES_PER_ROW) {
            for (i, byte) in row.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{:08b}", byte)?;
            }
            f.write_char('\n')?;
        }

        let mut width = Width(0);
        self.write_header(&mut width)?;
        for _ in 0..width.0 {
            f.write_char('=')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_layout() {
        let bits = [0b1000_0001u8, 0, 0xff, 0, 0, 0, 0, 0, 0b0000_0010];
        let grid = BitGrid::new(&bits, 2, 10);
        let rendered = grid.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(grid.rows(), 2);
        assert!(lines[0].contains("(9 Bytes Array) | Elements (2 / 10)"));
        assert_eq!(lines[1], "");
        assert_eq!(
            lines[2],
            "10000001 00000000 11111111 00000000 00000000 00000000 00000000 00000000"
        );
        assert_eq!(lines[3], "00000010");
        assert_eq!(lines[4].len(), lines[0].len());
        assert!(lines[4].chars().all(|c| c == '='));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_footer_follows_last_row() {
        let bits = [0xffu8; 16];
        let rendered = BitGrid::new(&bits, 1, 1).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        // header, blank, two full rows, footer
        assert_eq!(lines.len(), 5);
        assert!(!lines[3].is_empty());
        assert!(lines[4].starts_with('='));
        assert!(!rendered.contains("\n\n="));
    }

    #[test]
    fn test_ones_match_set_bits() {
        let bits = [0x5au8, 0x01, 0x80];
        let rendered = BitGrid::new(&bits, 0, 1).to_string();
        let body: String = rendered.lines().skip(2).take(1).collect();
        let ones = body.chars().filter(|&c| c == '1').count() as u32;
        assert_eq!(ones, bits.iter().map(|b| b.count_ones()).sum::<u32>());
    }
}
