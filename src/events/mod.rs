// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Event definitions for log decoding
//!
//! This module provides the `sol!`-generated event types the pipelines decode
//! logs into. Decoding itself is done by each event kind in
//! [`pipeline`](crate::pipeline).

pub mod definitions;

pub use definitions::{Swap, Transfer};
