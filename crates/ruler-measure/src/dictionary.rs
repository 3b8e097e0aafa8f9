use crate::{MeasureError, codebook};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Predefined square marker families: inner bit grid size and library size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionaryId {
    Dict4x4_50,
    Dict4x4_100,
    Dict4x4_250,
    Dict4x4_1000,
    Dict5x5_50,
    Dict5x5_100,
    Dict5x5_250,
    Dict5x5_1000,
    Dict6x6_50,
    Dict6x6_100,
    Dict6x6_250,
    Dict6x6_1000,
    Dict7x7_50,
    Dict7x7_100,
    Dict7x7_250,
    Dict7x7_1000,
}

impl DictionaryId {
    pub const ALL: [DictionaryId; 16] = [
        DictionaryId::Dict4x4_50,
        DictionaryId::Dict4x4_100,
        DictionaryId::Dict4x4_250,
        DictionaryId::Dict4x4_1000,
        DictionaryId::Dict5x5_50,
        DictionaryId::Dict5x5_100,
        DictionaryId::Dict5x5_250,
        DictionaryId::Dict5x5_1000,
        DictionaryId::Dict6x6_50,
        DictionaryId::Dict6x6_100,
        DictionaryId::Dict6x6_250,
        DictionaryId::Dict6x6_1000,
        DictionaryId::Dict7x7_50,
        DictionaryId::Dict7x7_100,
        DictionaryId::Dict7x7_250,
        DictionaryId::Dict7x7_1000,
    ];

    /// Side of the inner bit grid, without the black border.
    pub fn grid_size(self) -> usize {
        match self {
            DictionaryId::Dict4x4_50
            | DictionaryId::Dict4x4_100
            | DictionaryId::Dict4x4_250
            | DictionaryId::Dict4x4_1000 => 4,
            DictionaryId::Dict5x5_50
            | DictionaryId::Dict5x5_100
            | DictionaryId::Dict5x5_250
            | DictionaryId::Dict5x5_1000 => 5,
            DictionaryId::Dict6x6_50
            | DictionaryId::Dict6x6_100
            | DictionaryId::Dict6x6_250
            | DictionaryId::Dict6x6_1000 => 6,
            DictionaryId::Dict7x7_50
            | DictionaryId::Dict7x7_100
            | DictionaryId::Dict7x7_250
            | DictionaryId::Dict7x7_1000 => 7,
        }
    }

    /// Number of distinct marker ids in the family.
    pub fn library_size(self) -> usize {
        match self {
            DictionaryId::Dict4x4_50
            | DictionaryId::Dict5x5_50
            | DictionaryId::Dict6x6_50
            | DictionaryId::Dict7x7_50 => 50,
            DictionaryId::Dict4x4_100
            | DictionaryId::Dict5x5_100
            | DictionaryId::Dict6x6_100
            | DictionaryId::Dict7x7_100 => 100,
            DictionaryId::Dict4x4_250
            | DictionaryId::Dict5x5_250
            | DictionaryId::Dict6x6_250
            | DictionaryId::Dict7x7_250 => 250,
            DictionaryId::Dict4x4_1000
            | DictionaryId::Dict5x5_1000
            | DictionaryId::Dict6x6_1000
            | DictionaryId::Dict7x7_1000 => 1000,
        }
    }

    /// Cells per marker side including the one-cell border.
    pub fn cells_per_side(self) -> usize {
        self.grid_size() + 2
    }

    /// Short name, e.g. `"5x5_50"`.
    pub fn name(self) -> String {
        let n = self.grid_size();
        format!("{n}x{n}_{}", self.library_size())
    }
}

impl fmt::Display for DictionaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DictionaryId {
    type Err = MeasureError;

    /// Accepts `"5x5_50"` as well as `"DICT_5X5_50"`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_prefix("dict_").unwrap_or(&lower);
        DictionaryId::ALL
            .into_iter()
            .find(|id| id.name() == name)
            .ok_or_else(|| MeasureError::Config(format!("unknown marker dictionary: {s}")))
    }
}

/// Rotate an `n`x`n` row-major bit grid a quarter turn clockwise.
///
/// Cell `(r, c)` is bit `n*n - 1 - (r*n + c)`, so the top-left cell is the most
/// significant bit.
pub fn rotate_bits(code: u64, n: usize) -> u64 {
    let bit = |r: usize, c: usize| (code >> (n * n - 1 - (r * n + c))) & 1;
    let mut rotated = 0u64;
    for r in 0..n {
        for c in 0..n {
            rotated = (rotated << 1) | bit(n - 1 - c, r);
        }
    }
    rotated
}

pub fn hamming_distance(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

/// Result of matching a sampled bit grid against a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeMatch {
    /// Index into the codebook, `None` for a dictionary that accepts any pattern.
    pub id: Option<u32>,
    /// Canonical code of the marker.
    pub code: u64,
    /// Quarter turns clockwise the marker appears rotated in the image.
    pub rotation: u8,
    pub distance: u32,
}

/// Share of a library's correctable bits that identification will correct.
pub const ERROR_CORRECTION_RATE: f64 = 0.6;

/// A marker family and the codewords it recognises.
///
/// Sampled grids are identified by Hamming distance to the codebook in all four
/// rotations. A dictionary built with [`MarkerDictionary::any_pattern`] has no
/// codebook and takes any non-uniform grid instead, reported by its canonical
/// code (the minimum over rotations).
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDictionary {
    id: DictionaryId,
    codebook: Cow<'static, [u64]>,
    max_correction_bits: u32,
    any_pattern: bool,
}

impl MarkerDictionary {
    /// The embedded library of the family: its first `library_size` codewords,
    /// correcting up to [`ERROR_CORRECTION_RATE`] of the bits the library's
    /// spacing allows.
    pub fn new(id: DictionaryId) -> Self {
        let (grid, size) = (id.grid_size(), id.library_size());
        let codebook = codebook::table(grid)
            .map(|table| Cow::Borrowed(&table[..size]))
            .unwrap_or_default();
        let correctable = codebook::min_distance(grid, size).map_or(0, |d| d.saturating_sub(1) / 2);
        Self {
            id,
            codebook,
            max_correction_bits: (correctable as f64 * ERROR_CORRECTION_RATE).floor() as u32,
            any_pattern: false,
        }
    }

    /// Accept every non-uniform bit grid of the family's size, without ids.
    pub fn any_pattern(id: DictionaryId) -> Self {
        Self {
            id,
            codebook: Cow::Borrowed(&[]),
            max_correction_bits: 0,
            any_pattern: true,
        }
    }

    /// Replace the codewords, id order, row-major bits.
    ///
    /// Entries beyond the library size are ignored.
    pub fn with_codebook(mut self, mut codebook: Vec<u64>, max_correction_bits: u32) -> Self {
        let limit = self.id.library_size();
        if codebook.len() > limit {
            log::warn!(
                "codebook has {} entries, {} holds {}; truncating",
                codebook.len(),
                self.id,
                limit
            );
            codebook.truncate(limit);
        }
        let mask = self.code_mask();
        for word in codebook.iter_mut() {
            *word &= mask;
        }
        self.codebook = Cow::Owned(codebook);
        self.max_correction_bits = max_correction_bits;
        self.any_pattern = false;
        self
    }

    pub fn with_max_correction_bits(mut self, bits: u32) -> Self {
        self.max_correction_bits = bits;
        self
    }

    pub fn id(&self) -> DictionaryId {
        self.id
    }

    pub fn grid_size(&self) -> usize {
        self.id.grid_size()
    }

    pub fn codebook(&self) -> &[u64] {
        &self.codebook
    }

    pub fn max_correction_bits(&self) -> u32 {
        self.max_correction_bits
    }

    pub fn accepts_any_pattern(&self) -> bool {
        self.any_pattern
    }

    fn code_mask(&self) -> u64 {
        let bits = self.grid_size() * self.grid_size();
        if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 }
    }

    /// Match a sampled grid, read with the candidate's first corner as top-left.
    pub fn identify(&self, sampled: u64) -> Option<CodeMatch> {
        let n = self.grid_size();
        let mask = self.code_mask();
        let mut rotations = [sampled & mask; 4];
        for r in 1..4 {
            rotations[r] = rotate_bits(rotations[r - 1], n);
        }

        // `r` turns bring the grid upright, so it appears turned (4 - r) % 4
        let appears_turned = |r: usize| ((4 - r) % 4) as u8;

        if self.any_pattern {
            if sampled & mask == 0 || sampled & mask == mask {
                return None;
            }
            let (r, &code) = rotations
                .iter()
                .enumerate()
                .min_by_key(|&(r, &code)| (code, r))?;
            return Some(CodeMatch {
                id: None,
                code,
                rotation: appears_turned(r),
                distance: 0,
            });
        }

        let mut best: Option<(u32, usize, usize)> = None;
        for (id, &word) in self.codebook.iter().enumerate() {
            for (r, &code) in rotations.iter().enumerate() {
                let distance = hamming_distance(code, word);
                if best.is_none_or(|(d, _, _)| distance < d) {
                    best = Some((distance, id, r));
                }
            }
        }

        let (distance, id, r) = best?;
        if distance > self.max_correction_bits {
            return None;
        }
        Some(CodeMatch {
            id: Some(id as u32),
            code: self.codebook[id],
            rotation: appears_turned(r),
            distance,
        })
    }
}

impl Default for MarkerDictionary {
    fn default() -> Self {
        Self::new(DictionaryId::Dict5x5_50)
    }
}
