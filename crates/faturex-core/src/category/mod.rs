//! Category classification via a priority-ordered pattern table.
//!
//! The table is external configuration (CSV columns `pattern`, `categoria`,
//! `prioridade`); the matching algorithm is fixed: uppercase the description,
//! scan rules in ascending priority, first substring match wins.

use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::ExtractionError;
use crate::models::embedded::CATEGORY_MAP_CSV;

/// Category assigned when no pattern matches.
pub const DEFAULT_CATEGORY: &str = "Outros";

/// One row of the category map.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    /// Uppercased substring looked for in the description.
    pub pattern: String,
    /// Category label returned on match.
    pub categoria: String,
    /// Evaluation order, ascending; lower values win.
    pub prioridade: i32,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    pattern: String,
    categoria: String,
    prioridade: i32,
}

/// Priority-ordered, read-only collection of category rules.
///
/// Loaded once and never mutated afterwards, so it can be shared freely
/// across threads processing different documents.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    rules: Vec<CategoryRule>,
}

impl CategoryTable {
    /// Build a table from rules: patterns are uppercased and the rules
    /// stable-sorted ascending by priority.
    pub fn new(mut rules: Vec<CategoryRule>) -> Self {
        for rule in &mut rules {
            rule.pattern = rule.pattern.to_uppercase();
        }
        rules.sort_by_key(|r| r.prioridade);
        Self { rules }
    }

    /// Load a table from CSV with columns `pattern,categoria,prioridade`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ExtractionError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut rules = Vec::new();

        for row in csv_reader.deserialize::<RawRule>() {
            let raw = row.map_err(|e| ExtractionError::CategoryTable(e.to_string()))?;
            rules.push(CategoryRule {
                pattern: raw.pattern,
                categoria: raw.categoria,
                prioridade: raw.prioridade,
            });
        }

        Ok(Self::new(rules))
    }

    /// Load a table from a CSV file on disk.
    pub fn from_path(path: &Path) -> Result<Self, ExtractionError> {
        let file = std::fs::File::open(path)
            .map_err(|e| ExtractionError::CategoryTable(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(file)
    }

    /// The map compiled into the binary.
    pub fn embedded() -> Self {
        Self::from_reader(CATEGORY_MAP_CSV.as_bytes())
            .expect("embedded category map is valid CSV")
    }

    /// Process-wide embedded table, loaded once on first use.
    pub fn global() -> &'static CategoryTable {
        static TABLE: OnceLock<CategoryTable> = OnceLock::new();
        TABLE.get_or_init(CategoryTable::embedded)
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First-match-wins classification over the uppercased description.
    ///
    /// Rules are scanned strictly in priority order, so a broad low-priority
    /// pattern shadows a more specific one later in the table.
    pub fn classify(&self, descricao: &str) -> String {
        let text = descricao.to_uppercase();
        self.rules
            .iter()
            .find(|rule| text.contains(&rule.pattern))
            .map(|rule| rule.categoria.clone())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
    }
}
