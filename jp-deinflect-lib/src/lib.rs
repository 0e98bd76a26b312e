pub mod word_type;
pub mod types;
pub mod tables;
pub mod deinflect;
pub mod segment;
pub mod analysis;
pub mod output;

pub use analysis::analyze_conjugations;
pub use deinflect::{Deinflector, UnconjugateOptions, DEFAULT_DEPTH_LIMIT};
pub use segment::{SegAttributes, SegKind, SentSeg};
pub use tables::{FrequencyTable, RuleTable, TableError};
pub use types::{ConjugationStep, DeinflectionCandidate, DerivationAttribute, DerivationRule};
pub use word_type::WordType;
