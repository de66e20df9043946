// Skill extraction: static alias catalog, alias table, canonicalizer.
// The table is built once in main and shared read-only behind an Arc.

pub mod alias_table;
pub mod canonicalizer;
pub mod catalog;
pub mod handlers;
