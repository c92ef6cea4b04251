//! Ordered rule set for inline splitting.

mod defaults;
mod rule;

pub use defaults::default_rules;
pub use rule::Rule;

use indexmap::IndexMap;

use crate::span::Span;
use crate::Result;

/// Named rules, applied in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    rules: IndexMap<String, Rule>,
}

impl Rules {
    /// Create a rule set with the built-in rules
    pub fn new() -> Self {
        let mut rules = Self::empty();
        for (key, rule) in default_rules() {
            rules.add(key, rule);
        }
        rules
    }

    /// Create a rule set with no rules
    pub fn empty() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Add a rule. A rule added under an existing key replaces it in place.
    pub fn add(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.insert(key.to_string(), rule);
        self
    }

    /// Remove a rule, keeping the order of the others
    pub fn remove(&mut self, key: &str) -> Option<Rule> {
        self.rules.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.rules.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(key, rule)| (key.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over the spans in order
    pub fn apply(&self, mut spans: Vec<Span>) -> Result<Vec<Span>> {
        for (key, rule) in &self.rules {
            spans = rule.apply(spans)?;
            log::trace!("rule `{}` produced {} span(s)", key, spans.len());
        }
        Ok(spans)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
