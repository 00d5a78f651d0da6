//! Cleaning and enrichment pipeline for hospital operations tables.
//!
//! This crate provides the transformation logic applied to the loaded store
//! before any report is valid:
//!
//! - **frame**: the [`HospitalStore`] holding the four relations
//! - **data_utils**: case-insensitive column access and typed extraction
//! - **normalization**: join-key trimming, event defaulting, dates, durations
//! - **stages**: the four in-place cleaning stages
//! - **pipeline**: ordered execution with stage preconditions
//! - **audit**: retained copies of deleted patient rows

pub mod audit;
pub mod data_utils;
pub mod error;
pub mod frame;
pub mod normalization;
pub mod pipeline;
pub mod stages;

pub use audit::RemovalAudit;
pub use error::{Result, TransformError};
pub use frame::{HospitalStore, TableFrame};
pub use pipeline::CleaningPipeline;
