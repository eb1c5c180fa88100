//! Built-in rule groups, one module per SPEC_FULL category (spec §4.4
//! "category (e.g. correctness, suspicious, pedantic)"; SPEC_FULL fixes the
//! full set to `correctness | suspicious | pedantic | style | restriction`).
//!
//! Mirrors the teacher's `groups::{errors, style}` layout
//! (`rslint_core::groups::errors::no_unused_labels`), one file per rule.

pub mod correctness;
pub mod pedantic;
pub mod restriction;
pub mod style;
pub mod suspicious;
