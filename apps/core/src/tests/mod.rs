//! Test Module
//!
//! Cross-module test suite for the triage core.
//!
//! ## Test Categories
//! - `triage_tests`: classifier tiers, probability invariants, entity extraction, full analysis
//! - `config_tests`: environment-driven configuration
