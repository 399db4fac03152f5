//! Attribute selection state
//!
//! Both layouts file attributes under `category → qualifier → bucket` and
//! share the pruning rules in [`buckets`]: no empty bucket and no category
//! without buckets survives a mutation.
//!
//! - [`AttributeSelectionStore`]: recency-keyed buckets with a must-have flag
//! - [`PriorityStore`]: tier-keyed buckets of individually dated entries
//! - [`ActiveQualifiers`]: the qualifier new selections are filed under

pub mod active;
pub mod buckets;
pub mod priority;
pub mod time;

pub use active::ActiveQualifiers;
pub use buckets::{BucketPayload, Buckets};
pub use priority::{AttributeEntry, PriorityStore, TierBucket};
pub use time::{AttributeSelectionStore, SelectionBucket};
