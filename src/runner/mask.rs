//! Opaque-pixel bitmaps for pixel-exact collision.
//!
//! Each row is packed into `u64` words, least significant bit first, so an
//! overlap test is a shifted AND over whole words instead of a per-pixel
//! scan. Bits past `width` are always zero.

const WORD_BITS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl Mask {
    /// Fully transparent mask.
    pub fn new(width: usize, height: usize) -> Self {
        let words_per_row = width.div_ceil(WORD_BITS);
        Self {
            width,
            height,
            words_per_row,
            bits: vec![0; words_per_row * height],
        }
    }

    /// Build a mask from character art. Every non-space character is an
    /// opaque `scale` x `scale` block. Ragged rows are padded with
    /// transparency.
    pub fn from_art<S: AsRef<str>>(rows: &[S], scale: usize) -> Self {
        let scale = scale.max(1);
        let art_width = rows
            .iter()
            .map(|r| r.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let mut mask = Mask::new(art_width * scale, rows.len() * scale);

        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.as_ref().chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        mask.set(col * scale + dx, row * scale + dy);
                    }
                }
            }
        }
        mask
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Mark a pixel opaque. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            let index = y * self.words_per_row + x / WORD_BITS;
            self.bits[index] |= 1u64 << (x % WORD_BITS);
        }
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.words_per_row + x / WORD_BITS;
        self.bits[index] & (1u64 << (x % WORD_BITS)) != 0
    }

    /// Number of opaque pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    fn row(&self, y: usize) -> &[u64] {
        let start = y * self.words_per_row;
        &self.bits[start..start + self.words_per_row]
    }

    /// True if any opaque pixel of `other`, placed at `offset` relative to
    /// this mask's origin, lands on an opaque pixel of this mask.
    pub fn overlap(&self, other: &Mask, offset: (i32, i32)) -> bool {
        let (dx, dy) = (offset.0 as i64, offset.1 as i64);

        let y_start = dy.max(0);
        let y_end = (self.height as i64).min(dy + other.height as i64);
        if y_start >= y_end {
            return false;
        }
        // Horizontal extents must intersect too
        if dx >= self.width as i64 || dx + (other.width as i64) <= 0 {
            return false;
        }

        for y in y_start..y_end {
            let mine = self.row(y as usize);
            let theirs = other.row((y - dy) as usize);
            for (k, word) in mine.iter().enumerate() {
                if *word == 0 {
                    continue;
                }
                let start = (k * WORD_BITS) as i64 - dx;
                if word & bits_at(theirs, start) != 0 {
                    return true;
                }
            }
        }
        false
    }
}

/// The 64 bits of `row` beginning at bit `start`, shifted down to bit 0.
/// Positions outside the row read as zero.
fn bits_at(row: &[u64], start: i64) -> u64 {
    if start <= -(WORD_BITS as i64) {
        return 0;
    }
    if start < 0 {
        let shift = (-start) as u32;
        return row.first().map_or(0, |w| w << shift);
    }
    let word = start as usize / WORD_BITS;
    let shift = (start as usize % WORD_BITS) as u32;
    let lo = row.get(word).copied().unwrap_or(0) >> shift;
    let hi = if shift == 0 {
        0
    } else {
        row.get(word + 1).copied().unwrap_or(0) << (WORD_BITS as u32 - shift)
    };
    lo | hi
}
