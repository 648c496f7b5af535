//! Advisory diagnostics about misuse and clock selection.

use thiserror::Error;

use crate::ClockKind;

/// Something the registry wants the host to know about.
///
/// None of these interrupt the caller. Misuse is ignored after being reported and the registry
/// state is left exactly as it was, so a host may log, count, ignore or escalate diagnostics
/// as it sees fit via its [`DiagnosticSink`](crate::DiagnosticSink).
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Diagnostic {
    /// `begin` was called for a mark that is already pending. The original start time is kept.
    #[error("'{name}' is already being tracked, call `end` first")]
    DuplicateBegin {
        /// The mark that was already pending.
        name: String,
    },

    /// `end` was called for a mark that has never completed and is not pending.
    #[error("`begin` not called for '{name}'")]
    NeverBegun {
        /// The mark that was ended.
        name: String,
    },

    /// `end` was called for a mark that is not pending but has completed before, meaning the
    /// matching `begin` has already been consumed.
    #[error("`end` called more than once for `begin` on '{name}'")]
    AlreadyEnded {
        /// The mark that was ended.
        name: String,
    },

    /// A dump was requested for a mark without any completed intervals.
    #[error("no timing details to dump for '{name}'")]
    DumpMiss {
        /// The mark that was requested.
        name: String,
    },

    /// A clock was selected for a new registry.
    #[error("using {kind} for timing")]
    ClockSelected {
        /// The selected clock.
        kind: ClockKind,
    },
}

/// How much attention a [`Diagnostic`] deserves.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum Severity {
    /// Expected operation, recorded for the curious.
    Info,

    /// Misuse by the caller, or degraded measurement quality.
    Warning,
}

impl Diagnostic {
    /// The severity of this diagnostic.
    ///
    /// Selecting the coarse fallback clock is a warning because every measurement from then on
    /// has whole-millisecond granularity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::ClockSelected { kind } if kind.is_sub_millisecond() => Severity::Info,
            _ => Severity::Warning,
        }
    }

    /// The mark this diagnostic is about, if any.
    #[must_use]
    pub fn mark_name(&self) -> Option<&str> {
        match self {
            Self::DuplicateBegin { name }
            | Self::NeverBegun { name }
            | Self::AlreadyEnded { name }
            | Self::DumpMiss { name } => Some(name),
            Self::ClockSelected { .. } => None,
        }
    }
}
