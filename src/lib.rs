//! Purpose: Library crate for loading typed JSON lists from bundled resources.
//! Exports: `api` (loader operations, resource set, date value types, errors).
//! Role: Backs applications that ship JSON data files alongside the binary.
//! Invariants: The `api` module is the only public path to loader primitives.
//! Invariants: Date grammars and the installed resource set are process-wide
//! and read-only after first use.
pub mod api;
mod core;
mod json;
