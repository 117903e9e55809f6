// Option store and ignored-rule set.
//
// Options are named boolean toggles defined by the rule table, not by the
// engine; the defaults are fixed when the engine is built and can be
// restored with `reset`. The ignore set suppresses all Flag actions of a
// rule id independently of options.

use hashbrown::{HashMap, HashSet};

/// Named boolean toggles consulted by the rule dispatcher.
///
/// A rule carrying an option tag is skipped unless that option is true.
/// Unknown option names read as false.
#[derive(Debug, Clone, Default)]
pub struct Options {
    defaults: HashMap<String, bool>,
    current: HashMap<String, bool>,
}

impl Options {
    /// Build an option store whose defaults are fixed for the engine's
    /// lifetime.
    pub fn new<I>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (String, bool)>,
    {
        let defaults: HashMap<String, bool> = defaults.into_iter().collect();
        let current = defaults.clone();
        Self { defaults, current }
    }

    /// True if the named option is active.
    pub fn is_set(&self, name: &str) -> bool {
        self.current.get(name).copied().unwrap_or(false)
    }

    /// Set a single option.
    pub fn set(&mut self, name: &str, value: bool) {
        self.current.insert(name.to_string(), value);
    }

    /// Merge a batch of option values.
    pub fn update<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = (String, bool)>,
    {
        for (name, value) in values {
            self.current.insert(name, value);
        }
    }

    /// Restore the construction-time defaults.
    pub fn reset(&mut self) {
        self.current = self.defaults.clone();
    }

    /// Iterate over the current option values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.current.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Set of rule ids whose Flag actions are suppressed.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    ids: HashSet<String>,
}

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the given rule id.
    pub fn ignore(&mut self, rule_id: &str) {
        self.ids.insert(rule_id.to_string());
    }

    /// True if the rule id is suppressed.
    pub fn contains(&self, rule_id: &str) -> bool {
        self.ids.contains(rule_id)
    }

    /// Lift all suppressions.
    pub fn reset(&mut self) {
        self.ids.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
