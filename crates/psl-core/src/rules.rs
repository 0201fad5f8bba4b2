//! Partitioned Public Suffix List rules
//!
//! A list is split into three ordered sets. Each set keeps the raw line text,
//! prefixes included, in the order the lines appeared in the source list.

// =============================================================================
// Rule Categories
// =============================================================================

/// Category a retained list line is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    /// Plain suffix rule (e.g. "com", "co.uk"). Also carries wildcard lines.
    FullMatch,
    /// Exception rule (e.g. "!city.kobe.jp")
    Exception,
    /// Wildcard rule (e.g. "*.kobe.jp")
    Wildcard,
}

impl RuleCategory {
    /// All categories, in emission order.
    pub const ALL: [RuleCategory; 3] = [Self::FullMatch, Self::Exception, Self::Wildcard];

    pub fn name(self) -> &'static str {
        match self {
            Self::FullMatch => "full matches",
            Self::Exception => "exceptions",
            Self::Wildcard => "wildcards",
        }
    }
}

// =============================================================================
// Rule Sets
// =============================================================================

/// The three rule sets produced from one list.
///
/// Wildcard lines are members of both `full_match` and `wildcard`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSets {
    pub full_match: Vec<String>,
    pub exception: Vec<String>,
    pub wildcard: Vec<String>,
}

impl RuleSets {
    /// Create empty rule sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the rules of one category.
    pub fn get(&self, category: RuleCategory) -> &[String] {
        match category {
            RuleCategory::FullMatch => &self.full_match,
            RuleCategory::Exception => &self.exception,
            RuleCategory::Wildcard => &self.wildcard,
        }
    }

    /// Total number of entries across all sets, overlap counted twice.
    pub fn total(&self) -> usize {
        self.full_match.len() + self.exception.len() + self.wildcard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Counters gathered while partitioning a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionStats {
    pub lines: usize,
    pub blank: usize,
    pub comments: usize,
    pub dropped_bare_wildcard: usize,
    pub full_match: usize,
    pub exception: usize,
    pub wildcard: usize,
}

impl PartitionStats {
    /// Lines that survived the blank/comment filter.
    pub fn retained(&self) -> usize {
        self.lines.saturating_sub(self.blank).saturating_sub(self.comments)
    }
}
