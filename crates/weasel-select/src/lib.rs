//! Statistical feature selection for bags of bigrams
//!
//! Two alternative procedures prune the symbolic-word vocabulary down to
//! the class-discriminative subset:
//!
//! - [`AnovaSelector`] — one-way F-test over dictionary-indexed counts
//! - [`ChiSquaredSelector`] — per-class occurrence vs. the class-prior
//!   expectation
//!
//! Both zero disqualified entries in place ("soft delete") so bags keep a
//! stable key set for downstream enumeration.

pub mod anova;
pub mod chi2;

pub use anova::{AnovaSelector, F_STATISTIC_CUTOFF};
pub use chi2::ChiSquaredSelector;
