use std::fmt;
use std::ops::Neg;

/// Identifier of a propositional variable, `1..=V`. Index 0 is reserved and
/// never assigned to a real variable.
pub type VarId = usize;

/// A propositional literal: a signed nonzero integer. The absolute value is
/// the variable index, the sign its polarity.
///
/// Mirrors the DIMACS CNF encoding directly rather than the usual 0-based
/// internal index, since the core never needs to pack anything else into
/// the same word and the direct encoding keeps `load`/`dimacs::format_assignment`
/// free of off-by-one translation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(i32);

impl Literal {
    /// Creates a literal from a nonzero signed integer.
    #[inline]
    pub fn new(raw: i32) -> Literal {
        debug_assert!(raw != 0, "literal 0 does not denote a variable");
        Literal(raw)
    }

    /// Creates the positive literal for a variable.
    #[inline]
    pub fn pos(var: VarId) -> Literal {
        Literal(var as i32)
    }

    /// Creates the negative literal for a variable.
    #[inline]
    pub fn neg(var: VarId) -> Literal {
        Literal(-(var as i32))
    }

    /// The variable this literal refers to.
    #[inline]
    pub fn var(self) -> VarId {
        self.0.unsigned_abs() as VarId
    }

    /// Whether this is the positive occurrence of its variable.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// The underlying signed integer, as used by DIMACS input/output.
    #[inline]
    pub fn to_i32(self) -> i32 {
        self.0
    }
}

impl Neg for Literal {
    type Output = Literal;

    #[inline]
    fn neg(self) -> Literal {
        Literal(-self.0)
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(any(test, feature = "testing-utils"))]
pub mod strategy {
    use super::Literal;
    use proptest::prelude::*;

    /// A literal over variables `1..=max_var`, for use by proptest strategies.
    pub fn literal(max_var: VarId) -> impl Strategy<Value = Literal> {
        use super::VarId;
        (1..=max_var as VarId, any::<bool>())
            .prop_map(|(var, sign)| if sign { Literal::pos(var) } else { Literal::neg(var) })
    }
}
