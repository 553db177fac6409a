mod filter;
mod sort;

pub use filter::{Cmp, FilterClause, FilterExpr};
pub use sort::{OrderDirection, SortExpr};

use serde::{Deserialize, Serialize};

///
/// LimitExpr
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct LimitExpr {
    pub offset: u32,
    pub limit: Option<u32>,
}

///
/// LoadQuery
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct LoadQuery {
    pub filter: Option<FilterExpr>,
    pub sort: Option<SortExpr>,
    pub limit: Option<LimitExpr>,
}

impl LoadQuery {
    /// Construct an empty load query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filter.is_none() && self.sort.is_none() && self.limit.is_none()
    }

    /// Restrict to records matching the expression, AND-ed onto any filter
    /// already present.
    #[must_use]
    pub fn filter(mut self, expr: FilterExpr) -> Self {
        self.filter = Some(match self.filter {
            Some(existing) => existing.and(expr),
            None => expr,
        });
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: SortExpr) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.limit = Some(LimitExpr {
            offset,
            limit: self.limit.and_then(|l| l.limit),
        });
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(LimitExpr {
            offset: self.limit.map_or(0, |l| l.offset),
            limit: Some(limit),
        });
        self
    }

    /// Set offset=0, limit=1 (useful for first-match / existence checks).
    #[must_use]
    pub fn limit_1(self) -> Self {
        self.offset(0).limit(1)
    }
}

///
/// TESTS
///
