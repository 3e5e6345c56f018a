//! # asciifold-core
//!
//! Folds adversarially-obfuscated Unicode text down to a canonical ASCII
//! form, defeating the evasion tricks used against username, profanity and
//! spam filters: homoglyphs, invisible characters, diacritic stacking and
//! compatibility variants.
//!
//! ## Architecture
//!
//! ```text
//! Raw text
//!     │
//!     ├──> Decompose (NFD) and delete combining marks
//!     │
//!     ├──> Grapheme segmentation
//!     │
//!     ├──> Curated-table substitution (exact grapheme match)
//!     │
//!     ├──> Zero-width / invisible codepoint stripping
//!     │    (pure-ASCII and whole-grapheme emoji left untouched)
//!     │
//!     ├──> Compatibility normalization (NFKC)
//!     │
//!     ├──> Built-in confusable folding
//!     │
//!     └──> Leftover diagnostics, removal and trim
//! ```
//!
//! The curated table is maintained by the consistency checker in
//! [`checker`]: it deduplicates entries, removes anything the algorithmic
//! stages already resolve on their own, adjudicates disagreements through an
//! [`Adjudicator`] (memoized in an [`OverrideLedger`]) and re-sorts the
//! table into a canonical, diffable order.
//!
//! ## Example
//!
//! ```rust
//! use asciifold_core::{NormalizeOptions, Normalizer};
//!
//! let normalizer = Normalizer::new();
//! let folded = normalizer.normalize("са\u{0301}т", NormalizeOptions::default());
//! assert_eq!(folded, "cat");
//! ```

pub mod checker;
mod confusables;
mod emoji;
mod error;
mod map;
mod options;
mod pipeline;
mod zero_width;

pub use checker::{
    check, Adjudicator, CheckReport, ConflictRecord, Decision, OverrideLedger,
};
pub use error::{CoreError, Result};
pub use map::{MapTable, MappingUnit};
pub use options::NormalizeOptions;
pub use pipeline::Normalizer;
