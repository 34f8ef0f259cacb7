//! Purpose: Define the stable public Rust API boundary for resjson.
//! Exports: Loader operations, resource set, date value types, and errors.
//! Role: Public, additive-only surface; hides internal decode modules.
//! Invariants: This module is the only public path to loader primitives.
//! Invariants: Internal modules remain private and are not directly exposed.

pub use crate::core::datetime::{CalendarDate, LocalDateTime};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::loader::{load, load_from};
pub use crate::core::resource::{self, ResourceReader, ResourceSet};
