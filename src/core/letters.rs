//! Letter multisets and the weighted letter distribution
//!
//! Every board letter and dictionary word is reduced to a count per letter
//! of the 26-letter alphabet. A word can be spelled from a board when its
//! counts never exceed the board's counts.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use std::sync::LazyLock;

/// Size of the alphabet handled by the game
pub const ALPHABET_LEN: usize = 26;

/// Relative frequency of each letter `a..=z` on generated boards
///
/// Approximates English letter frequency. The table is part of the game's
/// observable behavior: seeded boards depend on it.
pub const LETTER_WEIGHTS: [u32; ALPHABET_LEN] = [
    8,  // a
    1,  // b
    3,  // c
    4,  // d
    12, // e
    2,  // f
    2,  // g
    6,  // h
    7,  // i
    1,  // j
    1,  // k
    4,  // l
    2,  // m
    7,  // n
    8,  // o
    2,  // p
    1,  // q
    6,  // r
    6,  // s
    9,  // t
    3,  // u
    1,  // v
    2,  // w
    1,  // x
    2,  // y
    1,  // z
];

/// Sampler over `a..=z` built from [`LETTER_WEIGHTS`]
static LETTER_DISTRIBUTION: LazyLock<WeightedIndex<u32>> = LazyLock::new(|| {
    WeightedIndex::new(LETTER_WEIGHTS).expect("letter weights are positive")
});

/// Draw one lowercase letter using [`LETTER_WEIGHTS`]
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use wordsmush::core::random_letter;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let letter = random_letter(&mut rng);
/// assert!(letter.is_ascii_lowercase());
/// ```
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    b'a' + LETTER_DISTRIBUTION.sample(rng) as u8
}

/// Map a lowercase ASCII letter to its alphabet index
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// Count of each letter `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts([u16; ALPHABET_LEN]);

impl LetterCounts {
    /// Count the letters of a lowercase ASCII word
    ///
    /// Returns `None` if the word contains anything other than `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use wordsmush::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_word("speed").unwrap();
    /// assert_eq!(counts.get(b'e'), 2);
    /// assert!(LetterCounts::from_word("it's").is_none());
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let mut counts = Self::default();
        for &letter in word.as_bytes() {
            counts.add(letter)?;
        }
        Some(counts)
    }

    /// Add one occurrence of `letter`
    ///
    /// Returns `None` (leaving the counts unchanged) for non-letters.
    #[inline]
    pub fn add(&mut self, letter: u8) -> Option<()> {
        let index = letter_index(letter)?;
        self.0[index] = self.0[index].saturating_add(1);
        Some(())
    }

    /// Number of occurrences of `letter`
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> u16 {
        letter_index(letter).map_or(0, |index| self.0[index])
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&count| usize::from(count)).sum()
    }

    /// Whether every letter count in `self` is covered by `available`
    #[inline]
    #[must_use]
    pub fn fits_within(&self, available: &Self) -> bool {
        self.0.iter().zip(available.0.iter()).all(|(need, have)| need <= have)
    }
}

impl FromIterator<u8> for LetterCounts {
    /// Non-letters are ignored.
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut counts = Self::default();
        for letter in iter {
            let _ = counts.add(letter);
        }
        counts
    }
}
