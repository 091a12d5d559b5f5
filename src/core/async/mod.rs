//! Asynchronous implementations of core components
//!
//! This module provides thread-safe, concurrent implementations of the ledger
//! components using DashMap for locking.
//!
//! # Architecture
//!
//! The async implementations expose the same operations as the synchronous
//! versions but with concurrent data structures:
//!
//! - **SharedLedger**: Thread-safe group storage using DashMap
//! - **AsyncLedgerEngine**: Applies records and keeps per-group drafts
//! - **BatchProcessor**: Partitions batches by group and spawns one task per group
//!
//! # Thread Safety
//!
//! - Operations on different groups proceed in parallel
//! - Operations on the same group are serialized
//! - No global locks - fine-grained locking per group

pub mod batch_processor;
pub mod engine;
pub mod ledger;

pub use batch_processor::{BatchProcessor, ProcessingResult};
pub use engine::AsyncLedgerEngine;
pub use ledger::SharedLedger;
