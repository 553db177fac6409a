use crate::{
    config::{
        ACTIVE_FIELD, CODE_FIELD, DEFAULT_FIELD, ELEMENT_FIELD, LANGUAGE_FIELD, ResolverConfig,
        SORT_FIELD,
    },
    error::Error,
};
use glossa_core::{
    query::{FilterExpr, LoadQuery, SortExpr},
    record::{Record, RecordId, TableId},
    store::RecordStore,
};
use serde::{Deserialize, Serialize};

///
/// Resolution
///
/// Outcome of a translation lookup: the winning translation row, or the
/// explicit "no translation" result. `NotFound` covers both a well-formed
/// query matching nothing and a primary table that cannot take part in
/// translation (no code).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Resolution {
    Found(Record),
    NotFound,
}

impl Resolution {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub const fn record(&self) -> Option<&Record> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub fn into_record(self) -> Option<Record> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }
}

///
/// TranslationResolver
///
/// Joins three tables to find the translated variant of an element: the
/// primary table owning the element, its translation table (derived by code
/// convention or taken from the overrides registry), and the language
/// catalog.
///
/// Strictly read-only and request-scoped: every [`resolve`] call runs the
/// element → language → translation stages in sequence against the borrowed
/// store and carries no state across calls.
///
/// [`resolve`]: TranslationResolver::resolve
///

pub struct TranslationResolver<'a, S> {
    store: &'a S,
    config: ResolverConfig,
}

impl<'a, S: RecordStore> TranslationResolver<'a, S> {
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self::with_config(store, ResolverConfig::default())
    }

    #[must_use]
    pub const fn with_config(store: &'a S, config: ResolverConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the translation of `element` for `language`.
    ///
    /// An absent or empty language code falls back to the active default
    /// language. Returns [`Resolution::NotFound`] when the element's table
    /// has no code or the translation table holds no matching row; every
    /// structural failure is an [`Error`].
    pub fn resolve(
        &self,
        element: RecordId,
        language: Option<&str>,
    ) -> Result<Resolution, Error> {
        let element = self.load_element(element)?;
        let language = self.resolve_language(language)?;

        self.resolve_translation(&element, &language)
    }

    /// The element whose translation is wanted. A non-positive or unknown id
    /// is a caller error.
    fn load_element(&self, id: RecordId) -> Result<Record, Error> {
        if id.0 <= 0 {
            return Err(Error::invalid_argument(format!(
                "element id must be positive, got {id}"
            )));
        }

        let element = self
            .store
            .record_by_id(None, id)?
            .ok_or_else(|| Error::invalid_argument(format!("element {id} does not exist")))?;

        tracing::debug!(element = %element.id, table = %element.table, "element loaded");

        Ok(element)
    }

    /// The language row for an explicit code, or the active default language
    /// when the code is absent, empty, or matches nothing.
    fn resolve_language(&self, code: Option<&str>) -> Result<Record, Error> {
        let requested = code.map(str::trim).filter(|c| !c.is_empty());

        let mut resolved = None;
        if let Some(code) = requested {
            resolved = self.store.find_record(
                None,
                &LoadQuery::new()
                    .filter(FilterExpr::eq(CODE_FIELD, code))
                    .limit_1(),
            )?;

            if resolved.is_none() {
                tracing::debug!(code, "no record for language code, trying default language");
            }
        }

        let resolved = match resolved {
            Some(record) => record,
            None => self
                .store
                .find_record(
                    Some(self.config.language_table),
                    &LoadQuery::new()
                        .filter(
                            FilterExpr::eq(ACTIVE_FIELD, true)
                                .and(FilterExpr::eq(DEFAULT_FIELD, true)),
                        )
                        .sort(SortExpr::desc(SORT_FIELD))
                        .limit_1(),
                )?
                .ok_or_else(|| {
                    Error::operation_failed(
                        "language not resolved: no matching code and no default language set",
                    )
                })?,
        };

        // the winner must itself carry a usable code
        if resolved.text(CODE_FIELD).is_none() {
            return Err(Error::operation_failed(
                "language not resolved: no matching code and no default language set",
            ));
        }

        tracing::debug!(language = %resolved.id, "language resolved");

        Ok(resolved)
    }

    /// The best-matching translation row for `(element, language)`.
    fn resolve_translation(
        &self,
        element: &Record,
        language: &Record,
    ) -> Result<Resolution, Error> {
        let Some(primary_code) = self.store.table_code(element.table)? else {
            // no code, no convention to derive from: translation is inapplicable
            tracing::debug!(table = %element.table, "primary table has no code");
            return Ok(Resolution::NotFound);
        };

        let translation_table = self.translation_table(element.table, &primary_code)?;

        let query = LoadQuery::new()
            .filter(
                FilterExpr::eq(ELEMENT_FIELD, element.id)
                    .and(FilterExpr::eq(LANGUAGE_FIELD, language.id)),
            )
            .sort(SortExpr::desc(SORT_FIELD))
            .limit_1();

        match self.store.find_record(Some(translation_table), &query)? {
            Some(row) => {
                tracing::debug!(row = %row.id, table = %translation_table, "translation found");
                Ok(Resolution::Found(row))
            }
            None => Ok(Resolution::NotFound),
        }
    }

    /// Translation table for a primary table: the overrides registry wins,
    /// else the code convention `<primary code> + suffix`.
    fn translation_table(&self, primary: TableId, primary_code: &str) -> Result<TableId, Error> {
        if let Some(table) = self.config.translation_overrides.get(&primary) {
            return Ok(*table);
        }

        let code = format!("{primary_code}{}", self.config.translation_suffix);

        self.store
            .table_by_code(&code)?
            .map(|meta| meta.id)
            .ok_or_else(|| {
                Error::operation_failed(format!(
                    "translation table '{code}' not found for '{primary_code}'"
                ))
            })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_core::{record::TableMetadata, store::MemoryStore};

    fn store_with_tables() -> MemoryStore {
        let mut store = MemoryStore::new();
        store
            .register_table(TableMetadata::new(TableId(1), "event"))
            .unwrap();
        store
            .register_table(TableMetadata::new(TableId(2), "event_translate"))
            .unwrap();
        store
    }

    #[test]
    fn translation_table_derived_by_suffix() {
        let store = store_with_tables();
        let resolver = TranslationResolver::new(&store);

        assert_eq!(
            resolver.translation_table(TableId(1), "event").unwrap(),
            TableId(2)
        );
    }

    #[test]
    fn translation_table_missing_is_operation_failed() {
        let store = store_with_tables();
        let resolver = TranslationResolver::new(&store);

        let err = resolver.translation_table(TableId(1), "news").unwrap_err();
        assert!(matches!(err, Error::OperationFailed(_)));
    }

    #[test]
    fn translation_table_override_wins() {
        let store = store_with_tables();
        let resolver = TranslationResolver::with_config(
            &store,
            ResolverConfig::new().override_translation_table(TableId(1), TableId(40)),
        );

        // the override is trusted even though no table 40 is registered
        assert_eq!(
            resolver.translation_table(TableId(1), "event").unwrap(),
            TableId(40)
        );
    }

    #[test]
    fn resolution_accessors() {
        let record = Record::new(RecordId(1), TableId(2));

        assert!(Resolution::Found(record.clone()).is_found());
        assert_eq!(Resolution::Found(record.clone()).record(), Some(&record));
        assert_eq!(Resolution::Found(record.clone()).into_record(), Some(record));

        assert!(!Resolution::NotFound.is_found());
        assert_eq!(Resolution::NotFound.record(), None);
        assert_eq!(Resolution::NotFound.into_record(), None);
    }
}
