use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    const fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }
}

///
/// SortExpr
///
/// Ordering specification over record fields. A record missing a sort field
/// orders below any record that carries it.
///
/// Ties after all fields break on record id, following the direction of the
/// last sort field (ascending when no fields are given). This keeps
/// descending limit-1 queries deterministic: among equal sort keys the
/// highest id wins.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortExpr {
    pub fields: Vec<(String, OrderDirection)>,
}

impl SortExpr {
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), OrderDirection::Asc)],
        }
    }

    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), OrderDirection::Desc)],
        }
    }

    #[must_use]
    pub fn then(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.fields.push((field.into(), direction));
        self
    }

    /// Direction applied to the implicit id tie-break.
    fn tie_break_direction(&self) -> OrderDirection {
        self.fields
            .last()
            .map_or(OrderDirection::Asc, |(_, direction)| *direction)
    }

    /// Total order over records under this sort.
    #[must_use]
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        for (field, direction) in &self.fields {
            // Option ordering puts None (missing field) first
            let ord = a.value_of(field).cmp(&b.value_of(field));
            let ord = direction.apply(ord);
            if ord != Ordering::Equal {
                return ord;
            }
        }

        self.tie_break_direction().apply(a.id.cmp(&b.id))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RecordId, TableId};

    fn row(id: i64, sort: Option<i64>) -> Record {
        let record = Record::new(RecordId(id), TableId(1));
        match sort {
            Some(n) => record.with_field("sort", n),
            None => record,
        }
    }

    #[test]
    fn asc_orders_naturally() {
        let sort = SortExpr::asc("sort");
        assert_eq!(
            sort.compare(&row(1, Some(10)), &row(2, Some(20))),
            Ordering::Less
        );
    }

    #[test]
    fn desc_reverses() {
        let sort = SortExpr::desc("sort");
        assert_eq!(
            sort.compare(&row(1, Some(10)), &row(2, Some(20))),
            Ordering::Greater
        );
    }

    #[test]
    fn missing_field_orders_below_present() {
        let sort = SortExpr::asc("sort");
        assert_eq!(
            sort.compare(&row(1, None), &row(2, Some(0))),
            Ordering::Less
        );

        // under Desc the missing row goes last
        let sort = SortExpr::desc("sort");
        assert_eq!(
            sort.compare(&row(1, None), &row(2, Some(0))),
            Ordering::Greater
        );
    }

    #[test]
    fn tie_breaks_on_id_following_last_direction() {
        let desc = SortExpr::desc("sort");
        // equal sort keys: higher id sorts first under Desc
        assert_eq!(
            desc.compare(&row(9, Some(100)), &row(5, Some(100))),
            Ordering::Less
        );

        let asc = SortExpr::asc("sort");
        assert_eq!(
            asc.compare(&row(9, Some(100)), &row(5, Some(100))),
            Ordering::Greater
        );
    }

    #[test]
    fn empty_sort_orders_by_id_asc() {
        let sort = SortExpr::default();
        assert_eq!(sort.compare(&row(1, None), &row(2, None)), Ordering::Less);
    }

    #[test]
    fn multi_field_chain() {
        let sort = SortExpr::desc("sort").then("code", OrderDirection::Asc);
        let a = row(1, Some(10)).with_field("code", "a");
        let b = row(2, Some(10)).with_field("code", "b");
        assert_eq!(sort.compare(&a, &b), Ordering::Less);
    }
}
