use crate::{
    query::LoadQuery,
    record::{Record, RecordId, TableId, TableMetadata},
    store::{RecordStore, StoreError},
};
use std::collections::BTreeMap;

///
/// MemoryStore
///
/// Reference [`RecordStore`] backed by ordered maps. Serves the test suite
/// and small embedded catalogs; production deployments implement
/// [`RecordStore`] over their own storage.
///
/// The write surface exists only to build content: registered tables, then
/// rows. Unscoped reads scan tables in `TableId` order, which keeps
/// cross-table lookups deterministic.
///

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: BTreeMap<TableId, TableMetadata>,
    codes: BTreeMap<String, TableId>,
    rows: BTreeMap<TableId, BTreeMap<RecordId, Record>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table. Re-registering an id replaces its metadata; a code
    /// already claimed by another table is rejected.
    pub fn register_table(&mut self, meta: TableMetadata) -> Result<(), StoreError> {
        if let Some(code) = &meta.code
            && let Some(owner) = self.codes.get(code)
            && *owner != meta.id
        {
            return Err(StoreError::DuplicateTableCode { code: code.clone() });
        }

        if let Some(previous) = self.tables.insert(meta.id, meta.clone())
            && let Some(previous_code) = previous.code
        {
            self.codes.remove(&previous_code);
        }

        if let Some(code) = meta.code {
            self.codes.insert(code, meta.id);
        }
        self.rows.entry(meta.id).or_default();

        Ok(())
    }

    /// Insert a row into its owning table, replacing any row with the same id.
    pub fn insert(&mut self, record: Record) -> Result<(), StoreError> {
        let Some(rows) = self.rows.get_mut(&record.table) else {
            return Err(StoreError::UnknownTable {
                table: record.table,
            });
        };
        rows.insert(record.id, record);

        Ok(())
    }

    fn scan(&self, scope: Option<TableId>) -> Box<dyn Iterator<Item = &Record> + '_> {
        match scope {
            Some(table) => match self.rows.get(&table) {
                Some(rows) => Box::new(rows.values()),
                None => Box::new(std::iter::empty()),
            },
            None => Box::new(self.rows.values().flat_map(BTreeMap::values)),
        }
    }
}

impl RecordStore for MemoryStore {
    fn table_code(&self, table: TableId) -> Result<Option<String>, StoreError> {
        Ok(self.tables.get(&table).and_then(|meta| meta.code.clone()))
    }

    fn table_by_code(&self, code: &str) -> Result<Option<TableMetadata>, StoreError> {
        Ok(self
            .codes
            .get(code)
            .and_then(|table| self.tables.get(table))
            .cloned())
    }

    fn record_by_id(
        &self,
        scope: Option<TableId>,
        id: RecordId,
    ) -> Result<Option<Record>, StoreError> {
        let found = match scope {
            Some(table) => self.rows.get(&table).and_then(|rows| rows.get(&id)),
            None => self.rows.values().find_map(|rows| rows.get(&id)),
        };

        Ok(found.cloned())
    }

    fn find_record(
        &self,
        scope: Option<TableId>,
        query: &LoadQuery,
    ) -> Result<Option<Record>, StoreError> {
        let mut matched: Vec<&Record> = self
            .scan(scope)
            .filter(|record| query.filter.as_ref().is_none_or(|f| f.matches(record)))
            .collect();

        let sort = query.sort.clone().unwrap_or_default();
        matched.sort_by(|a, b| sort.compare(a, b));

        let offset = query.limit.map_or(0, |l| l.offset) as usize;
        let within_limit = query.limit.and_then(|l| l.limit).is_none_or(|n| n > 0);

        tracing::trace!(
            scope = ?scope,
            matched = matched.len(),
            "memory store query"
        );

        if !within_limit {
            return Ok(None);
        }

        Ok(matched.into_iter().nth(offset).cloned())
    }
}

///
/// TESTS
///
