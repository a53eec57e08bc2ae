//! The four-letter DNA alphabet.
//!
//! Only uppercase `A`, `C`, `G` and `T` are canonical. Lowercase bases, RNA
//! `U` and IUPAC ambiguity codes such as `N` are all rejected.

/// A canonical DNA base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// All bases in alphabetical order.
    pub const ALL: [Self; 4] = [Self::A, Self::C, Self::G, Self::T];

    /// Returns the base as its uppercase character.
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }
}

impl TryFrom<char> for Base {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'A' => Ok(Self::A),
            'C' => Ok(Self::C),
            'G' => Ok(Self::G),
            'T' => Ok(Self::T),
            other => Err(other),
        }
    }
}

impl From<Base> for char {
    fn from(base: Base) -> Self {
        base.as_char()
    }
}

/// Returns `true` if `c` is one of `A`, `C`, `G` or `T`.
///
/// # Example
///
/// ```rust
/// use kmerich::alphabet::is_canonical_base;
///
/// assert!(is_canonical_base('G'));
/// assert!(!is_canonical_base('g'));
/// assert!(!is_canonical_base('U'));
/// ```
pub fn is_canonical_base(c: char) -> bool {
    Base::try_from(c).is_ok()
}

/// Returns `true` if `s` is non-empty and made only of canonical bases.
///
/// The empty string is not a k-mer.
///
/// # Example
///
/// ```rust
/// use kmerich::alphabet::is_valid_kmer;
///
/// assert!(is_valid_kmer("GATTACA"));
/// assert!(!is_valid_kmer("GATNACA"));
/// assert!(!is_valid_kmer(""));
/// ```
pub fn is_valid_kmer(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_canonical_base)
}
