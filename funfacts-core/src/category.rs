//! Fact categories and the label resolver used by navigation links.
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of fact categories, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Religion,
    Cosmos,
    Animal,
    Love,
    Cars,
    Phones,
    Innovations,
}

impl Category {
    pub const ALL: [Self; 7] = [
        Self::Religion,
        Self::Cosmos,
        Self::Animal,
        Self::Love,
        Self::Cars,
        Self::Phones,
        Self::Innovations,
    ];

    /// Category used when a link label matches no rule.
    pub const DEFAULT: Self = Self::Innovations;

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Religion => "Religion",
            Self::Cosmos => "Cosmos",
            Self::Animal => "Animal",
            Self::Love => "Love",
            Self::Cars => "Cars",
            Self::Phones => "Phones",
            Self::Innovations => "Innovations",
        }
    }

    /// Look up a category by its exact display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the resolver table: a case-insensitive pattern and the category it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveRule {
    pub pattern: &'static str,
    pub category: Category,
}

/// Ordered resolver table. The first matching row wins, so the order is observable:
/// a label such as "Love Cars" resolves to `Love`, never `Cars`.
pub const RESOLVE_RULES: [ResolveRule; 7] = [
    ResolveRule {
        pattern: "Religion",
        category: Category::Religion,
    },
    ResolveRule {
        pattern: "Cosmos",
        category: Category::Cosmos,
    },
    ResolveRule {
        pattern: "Animal",
        category: Category::Animal,
    },
    ResolveRule {
        pattern: "Love",
        category: Category::Love,
    },
    ResolveRule {
        pattern: "Cars",
        category: Category::Cars,
    },
    ResolveRule {
        pattern: "Phones",
        category: Category::Phones,
    },
    ResolveRule {
        pattern: "Innovation",
        category: Category::Innovations,
    },
];

static STANDARD: Lazy<CategoryResolver> = Lazy::new(|| {
    CategoryResolver::new(&RESOLVE_RULES, Category::DEFAULT)
        .expect("built-in resolver patterns are valid regular expressions")
});

/// Maps free-text link labels onto a category through an ordered rule table.
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    rules: Vec<(Regex, Category)>,
    fallback: Category,
}

impl CategoryResolver {
    /// Compile a resolver from an ordered rule table.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not a valid regular expression.
    pub fn new(rules: &[ResolveRule], fallback: Category) -> Result<Self, regex::Error> {
        let rules = rules
            .iter()
            .map(|rule| {
                RegexBuilder::new(rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|re| (re, rule.category))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules, fallback })
    }

    /// Resolver built from [`RESOLVE_RULES`] with [`Category::DEFAULT`] as fallback.
    ///
    /// # Panics
    ///
    /// Panics on first use if a built-in pattern fails to compile.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Index of the first rule matching `label`, if any.
    #[must_use]
    pub fn matching_rule(&self, label: &str) -> Option<usize> {
        let text = label.trim();
        self.rules.iter().position(|(re, _)| re.is_match(text))
    }

    #[must_use]
    pub fn resolve(&self, label: &str) -> Category {
        self.matching_rule(label)
            .and_then(|idx| self.rules.get(idx))
            .map_or(self.fallback, |(_, category)| *category)
    }

    #[must_use]
    pub const fn fallback(&self) -> Category {
        self.fallback
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Resolve a link label with the standard rule table.
#[must_use]
pub fn resolve(label: &str) -> Category {
    CategoryResolver::standard().resolve(label)
}
