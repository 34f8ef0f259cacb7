//! Purpose: Internal JSON parsing boundary shared by loader callsites.
//! Exports: `parse` module with decode helpers used by the loader.
//! Role: Single seam for parser implementation so callsites avoid ad hoc decode logic.
//! Invariants: Runtime JSON decoding goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
