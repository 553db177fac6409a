use crate::{
    record::Record,
    value::{FieldValue, Value},
};
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, Not};

///
/// Cmp
/// Comparison operators usable in filter clauses.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Cmp {
    Eq,
    EqCi,
    Ne,
    In,
}

///
/// FilterClause
/// represents a basic comparison expression: `field cmp value`
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FilterClause {
    pub field: String,
    pub cmp: Cmp,
    pub value: Value,
}

impl FilterClause {
    #[must_use]
    pub fn new(field: impl Into<String>, cmp: Cmp, value: impl FieldValue) -> Self {
        Self {
            field: field.into(),
            cmp,
            value: value.to_value(),
        }
    }

    /// Whether the stored value satisfies this clause.
    ///
    /// Case-insensitive comparison applies to text operands only; any other
    /// pairing falls back to strict equality.
    fn matches_value(&self, stored: &Value) -> bool {
        match self.cmp {
            Cmp::Eq => *stored == self.value,
            Cmp::EqCi => match (stored, &self.value) {
                (Value::Text(a), Value::Text(b)) => a.eq_ignore_ascii_case(b),
                (a, b) => a == b,
            },
            Cmp::Ne => *stored != self.value,
            Cmp::In => match &self.value {
                Value::List(candidates) => candidates.contains(stored),
                _ => false,
            },
        }
    }
}

///
/// FilterExpr
///
/// Represents logical expressions for querying/filtering records.
///
/// Expressions can be:
/// - `True` or `False` constants
/// - Single clauses comparing a field with a value
/// - Composite expressions: `And`, `Or`, and negation `Not`.
///
/// A clause on a field the record does not carry never matches, for any
/// operator.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum FilterExpr {
    #[default]
    True,
    False,
    Clause(FilterClause),
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
}

impl FilterExpr {
    /// Create a single clause: `field cmp value`.
    pub fn clause(field: impl Into<String>, cmp: Cmp, value: impl FieldValue) -> Self {
        Self::Clause(FilterClause::new(field, cmp, value))
    }

    pub fn eq(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Eq, value)
    }

    pub fn eq_ci(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::EqCi, value)
    }

    pub fn ne(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Ne, value)
    }

    pub fn in_iter<I>(field: impl Into<String>, vals: I) -> Self
    where
        I: IntoIterator,
        I::Item: FieldValue,
    {
        Self::clause(
            field,
            Cmp::In,
            vals.into_iter().map(|v| v.to_value()).collect::<Vec<_>>(),
        )
    }

    /// Combine two expressions into an `And` expression.
    ///
    /// This flattens nested `And`s to avoid deep nesting (e.g., `(a AND b)
    /// AND c` becomes `AND[a,b,c]`).
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::And(mut a), Self::And(mut b)) => {
                a.append(&mut b);
                Self::And(a)
            }
            (Self::And(mut a), b) => {
                a.push(b);
                Self::And(a)
            }
            (a, Self::And(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::And(list)
            }
            (a, b) => Self::And(vec![a, b]),
        }
    }

    /// Combine two expressions into an `Or` expression, flattening nested
    /// `Or`s similarly to `and`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Or(mut a), Self::Or(mut b)) => {
                a.append(&mut b);
                Self::Or(a)
            }
            (Self::Or(mut a), b) => {
                a.push(b);
                Self::Or(a)
            }
            (a, Self::Or(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::Or(list)
            }
            (a, b) => Self::Or(vec![a, b]),
        }
    }

    /// Negate this expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Evaluate this expression against a record.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Clause(clause) => record
                .value_of(&clause.field)
                .is_some_and(|stored| clause.matches_value(&stored)),
            Self::And(children) => children.iter().all(|c| c.matches(record)),
            Self::Or(children) => children.iter().any(|c| c.matches(record)),
            Self::Not(inner) => !inner.matches(record),
        }
    }
}

///
/// Bit Operations
/// allow us to do | & and ! on expressions
///

impl BitAnd for FilterExpr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for FilterExpr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for FilterExpr {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RecordId, TableId};

    fn record() -> Record {
        Record::new(RecordId(7), TableId(3))
            .with_field("code", "en")
            .with_field("active", true)
            .with_field("sort", 500i64)
    }

    fn clause(field: &str) -> FilterExpr {
        FilterExpr::eq(field, "foo")
    }

    #[test]
    fn constructors_build_expected_clauses() {
        match FilterExpr::eq("a", 1i64) {
            FilterExpr::Clause(c) => {
                assert_eq!(c.field, "a");
                assert_eq!(c.cmp, Cmp::Eq);
                assert_eq!(c.value, Value::Int(1));
            }
            _ => panic!("expected Clause"),
        }

        match FilterExpr::in_iter("a", [1i64, 2]) {
            FilterExpr::Clause(c) => {
                assert_eq!(c.cmp, Cmp::In);
                assert_eq!(c.value, Value::List(vec![Value::Int(1), Value::Int(2)]));
            }
            _ => panic!("expected Clause"),
        }
    }

    #[test]
    fn and_flattening() {
        let f = (clause("a") & (clause("b") & clause("c"))) & clause("d");
        match f {
            FilterExpr::And(children) => assert_eq!(children.len(), 4),
            _ => panic!("expected And"),
        }
    }

    #[test]
    fn or_flattening() {
        let f = (clause("x") | (clause("y") | clause("z"))) | clause("w");
        match f {
            FilterExpr::Or(children) => assert_eq!(children.len(), 4),
            _ => panic!("expected Or"),
        }
    }

    #[test]
    fn eq_matches() {
        assert!(FilterExpr::eq("code", "en").matches(&record()));
        assert!(!FilterExpr::eq("code", "fr").matches(&record()));
        assert!(FilterExpr::eq("active", true).matches(&record()));
        assert!(FilterExpr::eq("id", 7i64).matches(&record()));
    }

    #[test]
    fn eq_ci_matches_text_only() {
        assert!(FilterExpr::eq_ci("code", "EN").matches(&record()));
        assert!(!FilterExpr::eq_ci("code", "FR").matches(&record()));
        assert!(FilterExpr::eq_ci("sort", 500i64).matches(&record()));
    }

    #[test]
    fn missing_field_never_matches() {
        assert!(!FilterExpr::eq("missing", "x").matches(&record()));
        assert!(!FilterExpr::ne("missing", "x").matches(&record()));
        assert!(!FilterExpr::in_iter("missing", ["x"]).matches(&record()));
    }

    #[test]
    fn in_matches_membership() {
        assert!(FilterExpr::in_iter("code", ["de", "en"]).matches(&record()));
        assert!(!FilterExpr::in_iter("code", ["de", "fr"]).matches(&record()));
    }

    #[test]
    fn composite_evaluation() {
        let expr = FilterExpr::eq("active", true).and(FilterExpr::eq("code", "en"));
        assert!(expr.matches(&record()));

        let expr = FilterExpr::eq("active", false).or(FilterExpr::eq("code", "en"));
        assert!(expr.matches(&record()));

        assert!(!FilterExpr::eq("code", "en").not().matches(&record()));
        assert!(FilterExpr::True.matches(&record()));
        assert!(!FilterExpr::False.matches(&record()));
    }

    #[test]
    fn type_mismatch_does_not_match() {
        // "sort" holds Int(500); a text operand is a different value outright
        assert!(!FilterExpr::eq("sort", "500").matches(&record()));
    }
}
