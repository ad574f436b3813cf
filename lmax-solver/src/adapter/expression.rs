use std::fmt::Debug;
use std::fmt::Display;

/// A constraint over variable handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression<Handle> {
    /// `\sum c_k * x_k + constant {<=, =, >=} rhs`.
    Linear(LinearComparison<Handle>),
    /// At least one of the two expressions holds.
    Or(Box<Expression<Handle>>, Box<Expression<Handle>>),
    /// `result = max(operands)`.
    Maximum { result: Handle, operands: Vec<Handle> },
}

/// The comparison operator of a [`LinearComparison`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    LessOrEqual,
    Equal,
    GreaterOrEqual,
}

/// The linear comparison `\sum c_k * x_k + constant {<=, =, >=} rhs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearComparison<Handle> {
    pub terms: Vec<(i32, Handle)>,
    pub constant: i32,
    pub comparator: Comparator,
    pub rhs: i32,
}

impl<Handle> Expression<Handle> {
    /// `\sum c_k * x_k {<=, =, >=} rhs`.
    pub fn linear(terms: Vec<(i32, Handle)>, comparator: Comparator, rhs: i32) -> Self {
        Expression::Linear(LinearComparison {
            terms,
            constant: 0,
            comparator,
            rhs,
        })
    }

    /// `left \/ right`.
    pub fn or(left: Expression<Handle>, right: Expression<Handle>) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    /// `result = max(operands)`.
    pub fn maximum(result: Handle, operands: Vec<Handle>) -> Self {
        Expression::Maximum { result, operands }
    }
}

impl<Handle: Copy> Expression<Handle> {
    /// Whether the expression holds when every handle takes the value given by `value_of`.
    pub fn is_satisfied_by(&self, value_of: impl Fn(Handle) -> i32 + Copy) -> bool {
        match self {
            Expression::Linear(comparison) => comparison.is_satisfied_by(value_of),
            Expression::Or(left, right) => {
                left.is_satisfied_by(value_of) || right.is_satisfied_by(value_of)
            }
            Expression::Maximum { result, operands } => operands
                .iter()
                .map(|&operand| value_of(operand))
                .max()
                .is_some_and(|maximum| maximum == value_of(*result)),
        }
    }
}

impl<Handle: Copy> LinearComparison<Handle> {
    fn is_satisfied_by(&self, value_of: impl Fn(Handle) -> i32) -> bool {
        let lhs = self
            .terms
            .iter()
            .map(|&(coefficient, handle)| coefficient as i64 * value_of(handle) as i64)
            .sum::<i64>()
            + self.constant as i64;
        let rhs = self.rhs as i64;

        match self.comparator {
            Comparator::LessOrEqual => lhs <= rhs,
            Comparator::Equal => lhs == rhs,
            Comparator::GreaterOrEqual => lhs >= rhs,
        }
    }
}

impl Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Comparator::LessOrEqual => write!(f, "<="),
            Comparator::Equal => write!(f, "="),
            Comparator::GreaterOrEqual => write!(f, ">="),
        }
    }
}

impl<Handle: Debug> Display for LinearComparison<Handle> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (coefficient, handle)) in self.terms.iter().enumerate() {
            if index > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{coefficient}*{handle:?}")?;
        }
        if self.constant != 0 || self.terms.is_empty() {
            write!(f, " + {}", self.constant)?;
        }
        write!(f, " {} {}", self.comparator, self.rhs)
    }
}

impl<Handle: Debug> Display for Expression<Handle> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Linear(comparison) => write!(f, "{comparison}"),
            Expression::Or(left, right) => write!(f, "({left}) \\/ ({right})"),
            Expression::Maximum { result, operands } => {
                write!(f, "{result:?} = max({operands:?})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(handle: usize) -> i32 {
        [3, 8, -2][handle]
    }

    #[test]
    fn linear_comparisons_include_the_constant() {
        // 3 - 8 + 5 = 0
        let comparison = LinearComparison {
            terms: vec![(1, 0), (-1, 1)],
            constant: 5,
            comparator: Comparator::Equal,
            rhs: 0,
        };

        assert!(Expression::Linear(comparison).is_satisfied_by(values));

        let doubled = vec![(2, 0)];
        assert!(Expression::linear(doubled.clone(), Comparator::GreaterOrEqual, 6)
            .is_satisfied_by(values));
        assert!(!Expression::linear(doubled, Comparator::LessOrEqual, 5).is_satisfied_by(values));
    }

    #[test]
    fn a_disjunction_needs_one_side() {
        let holds = Expression::linear(vec![(1, 1)], Comparator::LessOrEqual, 8);
        let fails = Expression::linear(vec![(1, 1)], Comparator::LessOrEqual, 7);

        assert!(Expression::or(fails.clone(), holds.clone()).is_satisfied_by(values));
        assert!(Expression::or(holds, fails.clone()).is_satisfied_by(values));
        assert!(!Expression::or(fails.clone(), fails).is_satisfied_by(values));
    }

    #[test]
    fn a_maximum_compares_with_the_largest_operand() {
        assert!(Expression::maximum(1, vec![0, 1, 2]).is_satisfied_by(values));
        assert!(!Expression::maximum(0, vec![0, 1, 2]).is_satisfied_by(values));
        assert!(!Expression::maximum(0, vec![]).is_satisfied_by(values));
    }

    #[test]
    fn expressions_are_printed_readably() {
        let before = |first, second| {
            Expression::linear(vec![(1, first), (-1, second)], Comparator::LessOrEqual, 0)
        };
        let expression = Expression::or(before("end_0", "start_1"), before("end_1", "start_0"));

        assert_eq!(
            expression.to_string(),
            "(1*\"end_0\" + -1*\"start_1\" <= 0) \\/ (1*\"end_1\" + -1*\"start_0\" <= 0)"
        );
    }
}
