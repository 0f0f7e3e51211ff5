// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Dotted-path lookup into serde_json::Value with typed extraction (search responses, API error bodies)
// role: extension/serde_json
// outputs: JsonFetch trait and JsonFetched wrapper
// invariants: No panics; missing paths and type mismatches yield None
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::de::DeserializeOwned;

/// A possibly-missing location inside a JSON document.
pub struct JsonFetched<'a> {
  inner: Option<&'a serde_json::Value>,
}

impl<'a> JsonFetched<'a> {
  /// Whether the path resolved to a value (including `null`).
  pub fn exists(&self) -> bool {
    self.inner.is_some()
  }

  /// Deserialize the value as `T`; `None` when missing or of the wrong shape.
  pub fn to<T>(&self) -> Option<T>
  where
    T: DeserializeOwned,
  {
    self.inner.and_then(|v| T::deserialize(v).ok())
  }
}

/// Fetch nested values via dotted object paths like `"items"` or `"user.login"`.
pub trait JsonFetch {
  fn fetch(&self, path: &str) -> JsonFetched<'_>;
}

impl JsonFetch for serde_json::Value {
  fn fetch(&self, path: &str) -> JsonFetched<'_> {
    if path.is_empty() {
      return JsonFetched { inner: Some(self) };
    }

    let inner = path.split('.').try_fold(self, |cur, key| cur.get(key));

    JsonFetched { inner }
  }
}
