//! Embedded default category map.
//!
//! The map ships inside the binary so the tool works without any external
//! data files. An external CSV with the same columns overrides it.

/// Default category map CSV (columns: pattern, categoria, prioridade).
pub static CATEGORY_MAP_CSV: &str = include_str!("../../data/categorias_map.csv");
