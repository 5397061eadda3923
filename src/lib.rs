//! Objective Sherpa - Guided drafting of learning objectives
//!
//! This crate walks a user through writing a learning objective (subject,
//! cognitive level, measurement) and scores finished objectives against
//! Bloom's taxonomy.

pub mod application;
pub mod config;
pub mod domain;
