// Extension catalog response types.
// Defines structs for deserializing extension-query responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One extension record as returned by the catalog.
///
/// The record is kept as the JSON object the API sent, so it is written
/// back to the cache unchanged (explicit `null`s and unknown keys included).
/// The fields the report reads are exposed through typed accessors; a
/// missing key and a value of the wrong type both read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extension {
    fields: Map<String, Value>,
}

impl Extension {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn creator(&self) -> Option<&str> {
        self.str_field("creator")
    }

    pub fn uuid(&self) -> Option<&str> {
        self.str_field("uuid")
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    /// Shell version → release info. Only the keys are inspected.
    pub fn shell_version_map(&self) -> Option<&Map<String, Value>> {
        self.fields.get("shell_version_map").and_then(Value::as_object)
    }

    /// The raw JSON object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Name and description joined by a space, missing parts empty.
    pub fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.name().unwrap_or_default(),
            self.description().unwrap_or_default()
        )
    }

    /// Whether the record lists a release for the given shell version.
    pub fn supports_shell(&self, version: &str) -> bool {
        self.shell_version_map()
            .is_some_and(|map| map.contains_key(version))
    }
}

impl From<Map<String, Value>> for Extension {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// One page of the extension-query endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryPage {
    pub extensions: Vec<Extension>,
    pub numpages: u64,
}

/// Query parameters for a single page request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell_version: Option<String>,
}

impl PageQuery {
    pub fn first(sort: Option<&str>, shell_version: Option<&str>) -> Self {
        Self {
            page: 1,
            sort: sort.map(str::to_owned),
            shell_version: shell_version.map(str::to_owned),
        }
    }

    pub fn with_page(&self, page: u64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}
