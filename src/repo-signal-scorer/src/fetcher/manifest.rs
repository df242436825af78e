//! Build manifest inspection.

use serde_json::Value;

/// Path of the manifest probed for build scripts.
pub(crate) const PACKAGE_MANIFEST_PATH: &str = "package.json";

/// Returns true if a `package.json` body declares at least one script.
///
/// Anything that is not a JSON document with a non-empty `scripts` object
/// counts as "no scripts".
pub(crate) fn declares_scripts(manifest: &[u8]) -> bool {
    serde_json::from_slice::<Value>(manifest)
        .ok()
        .as_ref()
        .and_then(|value| value.get("scripts"))
        .and_then(Value::as_object)
        .is_some_and(|scripts| !scripts.is_empty())
}
