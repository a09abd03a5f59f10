// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module for the structured record the evaluator consumes.

mod record;

pub use record::CommitRecord;
