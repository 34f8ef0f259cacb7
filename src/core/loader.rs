//! Purpose: Load typed JSON lists from the bundled resource set.
//! Exports: `load`, `load_from`.
//! Role: Single synchronous entry point tying resource lookup to JSON decoding.
//! Invariants: Lookup misses fail `NotFound` before any decode attempt.
//! Invariants: Every downstream failure is wrapped as a `Load` error carrying
//! the resource path; the original cause stays on the source chain.

use crate::core::error::{Error, ErrorKind};
use crate::core::resource::{self, ResourceSet};
use crate::json;
use serde::de::DeserializeOwned;
use std::error::Error as StdError;
use std::io::Read;

/// Load a JSON array resource from the process-global resource set and
/// deserialize each element into `T`, preserving array order.
pub fn load<T: DeserializeOwned>(resource_path: &str) -> Result<Vec<T>, Error> {
    load_from(resource::global(), resource_path)
}

/// Same as [`load`], resolving against an explicit resource set.
pub fn load_from<T: DeserializeOwned>(
    resources: &ResourceSet,
    resource_path: &str,
) -> Result<Vec<T>, Error> {
    let mut reader = resources.open(resource_path)?;
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|err| load_failure(resource_path, err))?;
    let elements: Vec<T> =
        json::parse::from_str(&text).map_err(|err| load_failure(resource_path, err))?;
    tracing::debug!(
        resource = resource_path,
        bytes = text.len(),
        elements = elements.len(),
        "loaded json list"
    );
    Ok(elements)
}

fn load_failure(resource_path: &str, source: impl StdError + Send + Sync + 'static) -> Error {
    Error::new(ErrorKind::Load)
        .with_message(format!("Error while loading json file: {resource_path}"))
        .with_path(resource_path)
        .with_source(source)
}

#[cfg(test)]
mod tests {
    use super::load_from;
    use crate::core::error::ErrorKind;
    use crate::core::resource::ResourceSet;
    use std::error::Error as StdError;

    fn set_with(path: &str, payload: &'static [u8]) -> ResourceSet {
        let mut set = ResourceSet::new();
        set.insert(path, payload);
        set
    }

    #[test]
    fn decodes_elements_in_array_order() {
        let set = set_with("data/numbers.json", b"[3,1,2]");
        let numbers: Vec<u32> = load_from(&set, "data/numbers.json").expect("valid array");
        assert_eq!(numbers, vec![3, 1, 2]);
    }

    #[test]
    fn empty_array_yields_empty_vec() {
        let set = set_with("data/empty.json", b"[]");
        let values: Vec<serde_json::Value> =
            load_from(&set, "data/empty.json").expect("empty array is not an error");
        assert!(values.is_empty());
    }

    #[test]
    fn missing_resource_fails_before_decoding() {
        let set = ResourceSet::new();
        let error = load_from::<u32>(&set, "data/missing.json").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert!(error.source().is_none());
        assert_eq!(error.path(), Some("data/missing.json"));
    }

    #[test]
    fn malformed_json_is_wrapped_as_load_failure() {
        let set = set_with("data/broken.json", b"[1,2,");
        let error = load_from::<u32>(&set, "data/broken.json").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Load);
        assert!(
            error
                .to_string()
                .contains("Error while loading json file: data/broken.json")
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn non_utf8_payload_is_wrapped_as_load_failure() {
        let set = set_with("data/binary.json", b"\xff\xfe[]");
        let error = load_from::<u32>(&set, "data/binary.json").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Load);
        assert!(error.source().is_some());
    }

    #[test]
    fn top_level_object_is_a_structural_mismatch() {
        let set = set_with("data/object.json", b"{\"not\":\"an array\"}");
        let error = load_from::<u32>(&set, "data/object.json").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Load);
    }
}
