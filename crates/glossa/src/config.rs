use glossa_core::record::TableId;
use std::collections::BTreeMap;

/// Table holding language rows unless configured otherwise.
pub const DEFAULT_LANGUAGE_TABLE: TableId = TableId(3);

/// Suffix appended to a primary table code to derive its translation table
/// code (`event` -> `event_translate`) unless configured otherwise.
pub const DEFAULT_TRANSLATION_SUFFIX: &str = "_translate";

//
// Conventional field names
//
// The resolver addresses rows through these names; they are the schema
// convention the surrounding content store is expected to follow.
//

/// Language code on a language row.
pub const CODE_FIELD: &str = "code";
/// Active flag on a language row.
pub const ACTIVE_FIELD: &str = "active";
/// Default-language flag on a language row.
pub const DEFAULT_FIELD: &str = "default";
/// Sort key on language and translation rows.
pub const SORT_FIELD: &str = "sort";
/// Element reference on a translation row.
pub const ELEMENT_FIELD: &str = "element";
/// Language reference on a translation row.
pub const LANGUAGE_FIELD: &str = "language";

///
/// ResolverConfig
///
/// Tunable surface of the resolver. The overrides registry maps a primary
/// table directly to its translation table and is consulted before suffix
/// derivation; derivation stays the default policy.
///

#[derive(Clone, Debug)]
pub struct ResolverConfig {
    pub language_table: TableId,
    pub translation_suffix: String,
    pub translation_overrides: BTreeMap<TableId, TableId>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            language_table: DEFAULT_LANGUAGE_TABLE,
            translation_suffix: DEFAULT_TRANSLATION_SUFFIX.to_string(),
            translation_overrides: BTreeMap::new(),
        }
    }
}

impl ResolverConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn language_table(mut self, table: TableId) -> Self {
        self.language_table = table;
        self
    }

    #[must_use]
    pub fn translation_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.translation_suffix = suffix.into();
        self
    }

    /// Map a primary table directly to its translation table, bypassing
    /// suffix derivation for that table.
    #[must_use]
    pub fn override_translation_table(mut self, primary: TableId, translation: TableId) -> Self {
        self.translation_overrides.insert(primary, translation);
        self
    }
}

///
/// TESTS
///
