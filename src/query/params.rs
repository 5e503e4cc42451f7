use serde_json::{Map, Value};

/// Ordered collection of query-string pairs.
///
/// Mirrors the pair-level operations of a URL search-params builder:
/// `set` replaces every pair stored under a key (the first occurrence keeps
/// its position), `append` adds one more pair for the key. Rendering
/// percent-encodes both keys and values and joins with `&`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Replace all pairs under `key` with a single pair. The first existing
    /// occurrence keeps its position; later duplicates are removed.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut i = first + 1;
                while i < self.pairs.len() {
                    if self.pairs[i].0 == key {
                        self.pairs.remove(i);
                    } else {
                        i += 1;
                    }
                }
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Add one more pair under `key`, preserving multiplicity and order.
    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.push((key.to_string(), value.into()));
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl std::fmt::Display for QueryPairs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

/// Serialize a flat key/value map into ordered query pairs.
///
/// Returns `None` for an absent map. Per-entry rules:
/// - null entries are dropped entirely (not encoded as empty string);
/// - strings, numbers and booleans become their canonical string form;
/// - arrays contribute one pair per element, in element order;
/// - anything else degrades to its compact JSON text as a single value.
///
/// There are no error conditions; every representable input produces a
/// deterministic pair sequence in map iteration order.
pub fn serialize_query_params(data: Option<&Map<String, Value>>) -> Option<QueryPairs> {
    let data = data?;
    let mut out = QueryPairs::new();

    for (key, value) in data {
        match value {
            Value::Null => {}
            Value::String(s) => out.set(key, s.clone()),
            Value::Number(n) => out.set(key, n.to_string()),
            Value::Bool(b) => out.set(key, b.to_string()),
            Value::Array(items) => {
                for item in items {
                    out.append(key, element_text(item));
                }
            }
            other => out.set(key, other.to_string()),
        }
    }

    Some(out)
}

/// Stringify a single array element: scalars canonically, structures as JSON.
fn element_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
