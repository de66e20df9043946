//! Skill Canonicalizer: finds which canonical skills a document mentions.

use std::collections::HashMap;
use std::sync::Arc;

use crate::skills::alias_table::AliasTable;

/// Canonical skill → the literal alias that matched it, in first-found order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillMatchSet {
    found: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl SkillMatchSet {
    /// Records `alias` for `skill`, replacing any alias recorded earlier.
    /// The skill keeps the position of its first recording.
    fn record(&mut self, skill: &str, alias: &str) {
        match self.index.get(skill) {
            Some(&idx) => self.found[idx].1 = alias.to_string(),
            None => {
                self.index.insert(skill.to_string(), self.found.len());
                self.found.push((skill.to_string(), alias.to_string()));
            }
        }
    }

    #[cfg(test)]
    pub fn contains(&self, skill: &str) -> bool {
        self.index.contains_key(skill)
    }

    pub fn alias_for(&self, skill: &str) -> Option<&str> {
        self.index
            .get(skill)
            .map(|&idx| self.found[idx].1.as_str())
    }

    #[cfg(test)]
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.found.iter().map(|(skill, _)| skill.as_str())
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.found.iter().map(|(_, alias)| alias.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.found
            .iter()
            .map(|(skill, alias)| (skill.as_str(), alias.as_str()))
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
}

/// Scans plain text for every alias in the shared table.
#[derive(Debug, Clone)]
pub struct SkillCanonicalizer {
    table: Arc<AliasTable>,
}

impl SkillCanonicalizer {
    pub fn new(table: Arc<AliasTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    /// Returns each canonical skill mentioned in `text` with one representative
    /// alias. Walks the table in order, so when several aliases of one skill
    /// occur, the last one walked is kept.
    pub fn extract(&self, text: &str) -> SkillMatchSet {
        let mut found = SkillMatchSet::default();
        if text.is_empty() {
            return found;
        }

        let lowered = text.to_lowercase();
        for entry in self.table.entries() {
            if entry.occurs_in(&lowered) {
                found.record(&entry.skill, &entry.alias);
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> SkillCanonicalizer {
        SkillCanonicalizer::new(Arc::new(AliasTable::builtin().unwrap()))
    }

    fn stub(table: &[(&str, &[&str])]) -> SkillCanonicalizer {
        SkillCanonicalizer::new(Arc::new(AliasTable::from_table(table).unwrap()))
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(builtin().extract("").is_empty());
    }

    #[test]
    fn test_whole_word_java() {
        let found = builtin().extract("I love Java development");
        assert!(found.contains("java"));
        assert_eq!(found.alias_for("java"), Some("java"));
    }

    #[test]
    fn test_java_not_matched_inside_javascript() {
        let found = builtin().extract("I wrote javascript");
        assert!(!found.contains("java"));
        assert!(found.contains("javascript"));
    }

    #[test]
    fn test_single_letter_alias_not_matched_inside_word() {
        let canon = stub(&[("r", &[])]);
        assert!(!canon.extract("your résumé").contains("r"));
        assert!(canon.extract("stats in R, daily").contains("r"));
    }

    #[test]
    fn test_trailing_punctuation_still_matches() {
        let found = builtin().extract("Python, Docker.");
        assert!(found.contains("python"));
        assert!(found.contains("docker"));
    }

    #[test]
    fn test_one_entry_per_skill_last_alias_wins() {
        let canon = stub(&[("python", &["py", "python3"])]);
        let found = canon.extract("python python3 py python");
        assert_eq!(found.len(), 1);
        assert_eq!(found.alias_for("python"), Some("python3"));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let canon = builtin();
        let text = "Senior engineer: Python, AWS, k8s, React.js, SQL and Docker";
        assert_eq!(canon.extract(text), canon.extract(text));
    }

    #[test]
    fn test_case_insensitive_matching_and_alias_display() {
        let found = builtin().extract("Deployed on K8S with Golang services");
        assert_eq!(found.alias_for("kubernetes"), Some("k8s"));
        assert_eq!(found.alias_for("go"), Some("golang"));
    }

    #[test]
    fn test_versioned_cpp_is_found() {
        let found = builtin().extract("Expert in C++17 and C++20");
        assert!(found.contains("c++"));
        assert_eq!(found.alias_for("c++"), Some("c++"));
    }

    #[test]
    fn test_multi_word_alias() {
        let found = builtin().extract("Strong background in machine learning.");
        assert!(found.contains("machine learning"));
    }

    #[test]
    fn test_skills_keep_first_found_order() {
        let canon = stub(&[("docker", &[]), ("python", &[])]);
        let found = canon.extract("python and docker");
        let order: Vec<&str> = found.skills().collect();
        assert_eq!(order, vec!["docker", "python"]);
    }
}
