//! K-mer lengths and enumeration of the full k-mer space.

use std::fmt;

use crate::{alphabet::Base, error::KmerLengthError};

/// A validated k-mer length.
///
/// Enumerating every k-mer needs `4^k` strings, so lengths are capped at
/// [`KmerLength::MAX`]. A `KmerLength` can only be built through
/// [`KmerLength::new`] or [`TryFrom<i64>`], which makes an invalid k
/// unrepresentable by the time it reaches [`all_kmers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KmerLength(usize);

impl KmerLength {
    /// Shortest supported k-mer.
    pub const MIN: u8 = 1;
    /// Longest supported k-mer.
    pub const MAX: u8 = 12;

    /// Validates `k`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kmerich::kmer::KmerLength;
    ///
    /// assert_eq!(KmerLength::new(5)?.get(), 5);
    /// assert!(KmerLength::new(0).is_err());
    /// # Ok::<(), kmerich::error::KmerLengthError>(())
    /// ```
    pub fn new(k: usize) -> Result<Self, KmerLengthError> {
        Self::try_from(i64::try_from(k).unwrap_or(i64::MAX))
    }

    /// Returns the length as a `usize`.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of distinct k-mers of this length, `4^k`.
    pub const fn space_size(self) -> usize {
        1 << (2 * self.0)
    }
}

impl TryFrom<i64> for KmerLength {
    type Error = KmerLengthError;

    fn try_from(k: i64) -> Result<Self, Self::Error> {
        let err = KmerLengthError {
            k,
            min: Self::MIN,
            max: Self::MAX,
        };
        if k < i64::from(Self::MIN) || k > i64::from(Self::MAX) {
            return Err(err);
        }
        usize::try_from(k).map(Self).map_err(|_| err)
    }
}

impl fmt::Display for KmerLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generates all `4^k` k-mers over `A`, `C`, `G`, `T` in lexicographic order.
///
/// Starting from the empty string, each round prepends every base to every
/// string of the previous round. Because the previous round is already
/// ordered, walking bases in the outer loop keeps the result sorted with the
/// most significant position first.
///
/// # Example
///
/// ```rust
/// use kmerich::kmer::{all_kmers, KmerLength};
///
/// let kmers = all_kmers(KmerLength::new(2)?);
/// assert_eq!(kmers.len(), 16);
/// assert_eq!(kmers[0], "AA");
/// assert_eq!(kmers[1], "AC");
/// assert_eq!(kmers[15], "TT");
/// # Ok::<(), kmerich::error::KmerLengthError>(())
/// ```
pub fn all_kmers(k: KmerLength) -> Vec<String> {
    let mut kmers = vec![String::new()];

    for _ in 0..k.get() {
        let mut extended = Vec::with_capacity(kmers.len() * Base::ALL.len());
        for base in Base::ALL {
            for suffix in &kmers {
                let mut kmer = String::with_capacity(suffix.len() + 1);
                kmer.push(base.as_char());
                kmer.push_str(suffix);
                extended.push(kmer);
            }
        }
        kmers = extended;
    }

    kmers
}
