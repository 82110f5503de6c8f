//! Stylesheet collection.

use crate::compiler;
use crate::rules::Rule;
use crate::Result;

/// An ordered sequence of rules.
///
/// Rules are kept exactly in construction order. They are never reordered,
/// deduplicated or merged by selector: repeated selectors are legal and the
/// cascade depends on their source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    /// The rules in this stylesheet.
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, builder style.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add a rule to the end of the stylesheet.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append every rule of `other`, after this sheet's rules.
    pub fn append(&mut self, other: Stylesheet) {
        self.rules.extend(other.rules);
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Compile to CSS with the default options.
    pub fn to_css(&self) -> Result<String> {
        compiler::compile(self)
    }
}

impl FromIterator<Rule> for Stylesheet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for Stylesheet {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Stylesheet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
