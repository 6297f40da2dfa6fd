//! Term representation for two-level minimization
//!
//! A [`Term`] is a product term over a fixed number of variables. Each position
//! holds a [`Bit`]: the variable must be 0, must be 1, or has been eliminated
//! by a merge and no longer matters.

use std::fmt;
use std::str::FromStr;

use crate::error::MinimizationError;
use crate::MintermId;

/// Value of a single variable position in a term
///
/// The derived ordering is `DontCare < Zero < One`, the same order the
/// characters `-`, `0`, `1` sort in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bit {
    /// Position eliminated by a merge (`-`)
    DontCare,
    /// Variable must be false (`0`)
    Zero,
    /// Variable must be true (`1`)
    One,
}

impl Bit {
    /// Parse a character into a bit
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            '-' => Some(Bit::DontCare),
            _ => None,
        }
    }

    /// Character representation
    pub fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
            Bit::DontCare => '-',
        }
    }

    /// Whether this position still constrains its variable
    pub fn is_literal(self) -> bool {
        !matches!(self, Bit::DontCare)
    }
}

/// A fixed-width product term such as `0-1`
///
/// Terms are immutable once built. They sort lexicographically over their
/// bits, which is the canonical order used for covers and reports.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Term {
    bits: Box<[Bit]>,
}

impl Term {
    /// Build a term from explicit bits
    pub fn new(bits: impl Into<Box<[Bit]>>) -> Self {
        Term { bits: bits.into() }
    }

    /// The all-`DontCare` term of the given width (the constant-true product)
    pub fn universal(width: usize) -> Self {
        Term::new(vec![Bit::DontCare; width])
    }

    /// Encode a minterm id as a zero-padded, most-significant-bit-first term
    ///
    /// Fails with [`MinimizationError::InvalidDomain`] when `value` does not fit
    /// in `width` bits instead of producing a term of the wrong length.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Term;
    ///
    /// let term = Term::from_minterm(5, 4).unwrap();
    /// assert_eq!(term.to_string(), "0101");
    /// assert!(Term::from_minterm(16, 4).is_err());
    /// ```
    pub fn from_minterm(value: MintermId, width: usize) -> Result<Self, MinimizationError> {
        if width > crate::MAX_VARIABLES {
            return Err(MinimizationError::TooManyVariables {
                requested: width,
                max: crate::MAX_VARIABLES,
            });
        }
        if width < 64 && value >> width != 0 {
            return Err(MinimizationError::InvalidDomain {
                value,
                num_vars: width,
            });
        }

        let bits: Vec<Bit> = (0..width)
            .rev()
            .map(|shift| {
                if (value >> shift) & 1 == 1 {
                    Bit::One
                } else {
                    Bit::Zero
                }
            })
            .collect();
        Ok(Term::new(bits))
    }

    /// Number of variable positions
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// The bits of this term
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Number of `One` positions, used to group terms before merging
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == Bit::One).count()
    }

    /// Number of positions that still name a variable
    pub fn literal_count(&self) -> usize {
        self.bits.iter().filter(|b| b.is_literal()).count()
    }

    /// Whether every position is `DontCare`
    pub fn is_universal(&self) -> bool {
        self.bits.iter().all(|&b| b == Bit::DontCare)
    }

    /// Whether the input combination `id` satisfies this term
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Term;
    ///
    /// let term: Term = "1-0".parse().unwrap();
    /// assert!(term.covers(0b100));
    /// assert!(term.covers(0b110));
    /// assert!(!term.covers(0b101));
    /// ```
    pub fn covers(&self, id: MintermId) -> bool {
        let width = self.width();
        if width < 64 && id >> width != 0 {
            return false;
        }
        self.bits.iter().enumerate().all(|(i, &bit)| {
            let set = (id >> (width - 1 - i)) & 1 == 1;
            match bit {
                Bit::DontCare => true,
                Bit::One => set,
                Bit::Zero => !set,
            }
        })
    }

    /// Merge two terms that differ in exactly one non-wildcard position
    ///
    /// Returns `None` when the terms have different widths, differ in more than
    /// one position, are identical, or when a `DontCare` faces a literal. On
    /// success the differing position becomes `DontCare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Term;
    ///
    /// let a: Term = "0-1".parse().unwrap();
    /// let b: Term = "0-0".parse().unwrap();
    /// assert_eq!(a.merge(&b).unwrap().to_string(), "0--");
    ///
    /// let c: Term = "1-0".parse().unwrap();
    /// assert!(a.merge(&c).is_none());
    /// ```
    pub fn merge(&self, other: &Term) -> Option<Term> {
        if self.width() != other.width() {
            return None;
        }

        let mut position = None;
        for (i, (&a, &b)) in self.bits.iter().zip(other.bits.iter()).enumerate() {
            if a == b {
                continue;
            }
            if position.is_some() || a == Bit::DontCare || b == Bit::DontCare {
                return None;
            }
            position = Some(i);
        }

        let position = position?;
        let mut bits = self.bits.to_vec();
        bits[position] = Bit::DontCare;
        Some(Term::new(bits))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter() {
            write!(f, "{}", bit.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({})", self)
    }
}

/// Error returned when a string is not made of `0`, `1` and `-`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid character {character:?} at position {position} in term")]
pub struct ParseTermError {
    /// The offending character
    pub character: char,
    /// Its position in the input
    pub position: usize,
}

impl FromStr for Term {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, character)| {
                Bit::from_char(character).ok_or(ParseTermError {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Term::new(bits))
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        term.to_string()
    }
}

impl TryFrom<String> for Term {
    type Error = ParseTermError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
