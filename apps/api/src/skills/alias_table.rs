//! Alias Table: immutable alias → canonical skill lookup, built once at startup.
//!
//! Two views over the same declarations:
//! - a flat lookup keyed by lowercased alias, iterated in first-insertion order
//! - a reverse index canonical skill → aliases (canonical name first)
//!
//! Colliding aliases resolve last-writer-wins: the later declaration takes over
//! the mapping but the alias keeps the slot of its first insertion. Nothing is
//! logged when that happens.

use std::collections::HashMap;

use regex::Regex;

use crate::skills::catalog::SKILL_ALIASES;

/// A single alias and the canonical skill it currently resolves to.
#[derive(Debug, Clone)]
pub struct AliasEntry {
    pub alias: String,
    pub skill: String,
    pattern: Regex,
}

impl AliasEntry {
    fn new(alias: String, skill: String) -> Result<Self, regex::Error> {
        let pattern = whole_word_pattern(&alias)?;
        Ok(Self {
            alias,
            skill,
            pattern,
        })
    }

    /// True when the alias occurs in `lowered` with a non-word character (or the
    /// start/end of text) on each side. `lowered` must already be lowercase.
    pub fn occurs_in(&self, lowered: &str) -> bool {
        self.pattern.is_match(lowered)
    }
}

/// Compiles a whole-word matcher for `alias`.
///
/// Each edge of the alias that is a word character must sit next to a non-word
/// character or the start/end of text. An edge that is punctuation needs no
/// guard, so `c++` matches in "c++ and rust" as well as in "c++17".
fn whole_word_pattern(alias: &str) -> Result<Regex, regex::Error> {
    let guard_start = alias.chars().next().is_some_and(is_word_char);
    let guard_end = alias.chars().last().is_some_and(is_word_char);
    Regex::new(&format!(
        "{}{}{}",
        if guard_start { r"(?:^|\W)" } else { "" },
        regex::escape(alias),
        if guard_end { r"(?:\W|$)" } else { "" },
    ))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
    by_alias: HashMap<String, usize>,
    reverse: Vec<(String, Vec<String>)>,
    by_skill: HashMap<String, usize>,
}

impl AliasTable {
    /// Builds the table from the built-in skill catalog.
    pub fn builtin() -> Result<Self, regex::Error> {
        Self::from_table(SKILL_ALIASES)
    }

    /// Builds a table from `(canonical skill, aliases)` declarations.
    ///
    /// The canonical name is registered as an alias of itself before its
    /// declared aliases. Lookup keys are lowercased; no other normalization.
    pub fn from_table(table: &[(&str, &[&str])]) -> Result<Self, regex::Error> {
        let mut built = Self::default();
        for (skill, aliases) in table {
            built.register(skill, skill)?;
            for alias in aliases.iter() {
                built.register(alias, skill)?;
            }
        }
        Ok(built)
    }

    fn register(&mut self, alias: &str, skill: &str) -> Result<(), regex::Error> {
        let key = alias.to_lowercase();

        match self.by_alias.get(&key) {
            Some(&idx) => self.entries[idx].skill = skill.to_string(),
            None => {
                self.by_alias.insert(key.clone(), self.entries.len());
                self.entries
                    .push(AliasEntry::new(key.clone(), skill.to_string())?);
            }
        }

        let slot = match self.by_skill.get(skill) {
            Some(&slot) => slot,
            None => {
                self.by_skill.insert(skill.to_string(), self.reverse.len());
                self.reverse.push((skill.to_string(), Vec::new()));
                self.reverse.len() - 1
            }
        };
        self.reverse[slot].1.push(key);
        Ok(())
    }

    /// Resolves an alias (case-insensitively) to its canonical skill.
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.by_alias
            .get(&alias.to_lowercase())
            .map(|&idx| self.entries[idx].skill.as_str())
    }

    /// Aliases declared for a canonical skill, canonical name first.
    pub fn aliases_of(&self, skill: &str) -> Option<&[String]> {
        self.by_skill
            .get(skill)
            .map(|&slot| self.reverse[slot].1.as_slice())
    }

    /// Flat lookup entries in iteration order.
    pub fn entries(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    /// Canonical skills in declaration order.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.reverse.iter().map(|(skill, _)| skill.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
