// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Injectable logger sink.
//!
//! The library never decides where its diagnostics go. Callers hand in
//! anything implementing [`Logger`]; the default is [`NullLogger`], which
//! drops everything. [`TracingLogger`] forwards to `tracing` so the usual
//! subscriber setup (see the CLI) picks the events up.

use std::fmt;
use std::sync::Arc;

/// Minimal sink: four levels, preformatted arguments.
pub trait Logger: Send + Sync {
    fn trace(&self, args: fmt::Arguments<'_>);
    fn debug(&self, args: fmt::Arguments<'_>);
    fn info(&self, args: fmt::Arguments<'_>);
    fn warn(&self, args: fmt::Arguments<'_>);
}

/// Shared handle stored by the facade.
pub type SharedLogger = Arc<dyn Logger>;

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn trace(&self, _args: fmt::Arguments<'_>) {}
    fn debug(&self, _args: fmt::Arguments<'_>) {}
    fn info(&self, _args: fmt::Arguments<'_>) {}
    fn warn(&self, _args: fmt::Arguments<'_>) {}
}

/// Forwards to `tracing` events with target `wnlookup`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn trace(&self, args: fmt::Arguments<'_>) {
        tracing::trace!(target: "wnlookup", "{}", args);
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(target: "wnlookup", "{}", args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(target: "wnlookup", "{}", args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        tracing::warn!(target: "wnlookup", "{}", args);
    }
}

pub(crate) fn null_logger() -> SharedLogger {
    Arc::new(NullLogger)
}
