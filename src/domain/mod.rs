//! Domain layer containing the drafting rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `taxonomy` - Bloom's levels, action verbs and sample objectives
//! - `analysis` - Objective scoring and improvement suggestions
//! - `conversation` - Dialogue stages, transcript and reply resolution
//! - `dataset` - Tabular demo utilities

pub mod analysis;
pub mod conversation;
pub mod dataset;
pub mod foundation;
pub mod taxonomy;
