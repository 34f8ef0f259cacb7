//! Purpose: Model the program's bundled resource set and scoped readers over it.
//! Exports: `ResourceSet`, `ResourceReader`, `install`, `global`.
//! Role: Black-box provider of named readable streams for the loader.
//! Invariants: Payloads are registered up front; lookups never touch the filesystem.
//! Invariants: The installed global set is write-once and read-only afterwards.

use crate::core::error::{Error, ErrorKind};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::{self, Read};
use std::sync::OnceLock;

/// Registry of logical path to byte payload, typically filled from
/// `include_bytes!`/`include_str!` data at startup.
#[derive(Clone, Debug, Default)]
pub struct ResourceSet {
    entries: BTreeMap<String, Cow<'static, [u8]>>,
}

impl ResourceSet {
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a payload under a logical path. A duplicate path replaces
    /// the earlier payload.
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) {
        self.entries.insert(path.into(), bytes.into());
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries.get(path).map(|bytes| bytes.as_ref())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Open a scoped reader over one resource. A miss fails `NotFound`
    /// immediately, before any decode attempt downstream.
    pub fn open(&self, path: &str) -> Result<ResourceReader<'_>, Error> {
        let bytes = self.get(path).ok_or_else(|| {
            Error::new(ErrorKind::NotFound)
                .with_message(format!("Resource not found: {path}"))
                .with_path(path)
        })?;
        Ok(ResourceReader {
            inner: io::Cursor::new(bytes),
        })
    }
}

/// Readable stream over a single resource's bytes. Dropping the reader
/// releases the borrow on every exit path.
#[derive(Debug)]
pub struct ResourceReader<'a> {
    inner: io::Cursor<&'a [u8]>,
}

impl Read for ResourceReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

static GLOBAL: OnceLock<ResourceSet> = OnceLock::new();
static EMPTY: ResourceSet = ResourceSet::new();

/// Install the process-global resource set. Callable once; later calls
/// fail `AlreadyExists` and leave the installed set untouched.
pub fn install(set: ResourceSet) -> Result<(), Error> {
    GLOBAL.set(set).map_err(|_| {
        Error::new(ErrorKind::AlreadyExists)
            .with_message("global resource set is already installed")
    })
}

/// The installed global set, or a shared empty set before installation
/// (every lookup against the empty set fails `NotFound`).
pub fn global() -> &'static ResourceSet {
    GLOBAL.get().unwrap_or(&EMPTY)
}
