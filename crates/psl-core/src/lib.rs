//! Public Suffix List Core Library
//!
//! This crate holds the data model shared by the list compiler and the CLI,
//! plus the lookup side of the generated tables.
//!
//! # Modules
//!
//! - `rules`: Partitioned rule sets (full match, exception, wildcard)
//! - `psl`: Suffix lookups and eTLD+1 extraction over a partitioned list

pub mod psl;
pub mod rules;

// Re-export commonly used types
pub use psl::{get_parent_domain, PublicSuffixList};
pub use rules::{PartitionStats, RuleCategory, RuleSets};
