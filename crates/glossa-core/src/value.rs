use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Value
///
/// Dynamic field value stored in records and compared in filter clauses.
///
/// Unit → internal placeholder for comparator right-hand sides; not a real
/// stored value.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<Value>),
    Unit,
}

impl Value {
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Stable cross-variant rank.
    ///
    /// Rank order is part of deterministic sort behavior and must remain
    /// fixed once published.
    const fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int(_) => 1,
            Self::Text(_) => 2,
            Self::List(_) => 3,
            Self::Unit => 4,
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) => a.cmp(b),
            (Self::Unit, Self::Unit) => Ordering::Equal,
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

///
/// FieldValue
/// Conversion into [`Value`] for ergonomic record and filter construction.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FieldValue for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}

impl FieldValue for i32 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl FieldValue for u32 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl FieldValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for () {
    fn to_value(&self) -> Value {
        Value::Unit
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variants() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Text("en".into()).as_text(), Some("en"));

        assert_eq!(Value::Int(7).as_bool(), None);
        assert_eq!(Value::Bool(true).as_int(), None);
        assert_eq!(Value::Unit.as_text(), None);
    }

    #[test]
    fn same_variant_orders_naturally() {
        assert!(Value::Int(1) < Value::Int(2));
        assert!(Value::Text("a".into()) < Value::Text("b".into()));
        assert!(Value::Bool(false) < Value::Bool(true));
    }

    #[test]
    fn cross_variant_orders_by_rank() {
        assert!(Value::Bool(true) < Value::Int(i64::MIN));
        assert!(Value::Int(i64::MAX) < Value::Text(String::new()));
        assert!(Value::Text("zzz".into()) < Value::List(vec![]));
        assert!(Value::List(vec![Value::Int(9)]) < Value::Unit);
    }

    #[test]
    fn field_value_conversions() {
        assert_eq!(true.to_value(), Value::Bool(true));
        assert_eq!(42i64.to_value(), Value::Int(42));
        assert_eq!(42i32.to_value(), Value::Int(42));
        assert_eq!("en".to_value(), Value::Text("en".to_string()));
        assert_eq!(().to_value(), Value::Unit);
        assert_eq!(
            vec![1i64, 2].to_value(),
            Value::List(vec![Value::Int(1), Value::Int(2)])
        );
    }
}
