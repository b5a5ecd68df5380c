//! Generic attribute-store documents.
//!
//! Documents live in an arena ([`DocumentTree`]). A parent owns the ids of
//! its children, grouped by collection key; a child only records the id of
//! its parent. [`Document`] is a cheap, copyable handle used for lookups.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Handle of a document inside a [`DocumentTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(usize);

#[derive(Debug, Clone)]
struct Entry {
    parent: Option<DocumentId>,
    location: String,
    attributes: IndexMap<String, Value>,
    children: IndexMap<String, Vec<DocumentId>>,
}

/// An arena of documents with a single root.
#[derive(Debug, Clone)]
pub struct DocumentTree {
    entries: Vec<Entry>,
}

impl DocumentTree {
    /// Create a tree holding only a root document with `attributes`.
    pub fn new(attributes: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self {
            entries: vec![Entry {
                parent: None,
                location: "root".to_string(),
                attributes: attributes.into_iter().collect(),
                children: IndexMap::new(),
            }],
        }
    }

    /// Build a tree from a JSON value.
    ///
    /// Object members whose value is a non-empty array of objects become
    /// child documents under that key; every other member is an attribute.
    pub fn from_value(value: Value) -> Result<Self> {
        let root = match value {
            Value::Object(root) => root,
            other => {
                return Err(Box::new(Error::InvalidRoot {
                    found: kind_of(&other),
                }));
            }
        };
        let mut tree = Self::new([]);
        tree.fill(DocumentId(0), root);
        tracing::debug!(documents = tree.len(), "loaded document tree");
        Ok(tree)
    }

    /// Parse a JSON configuration.
    pub fn from_json_str(src: &str, filename: &str) -> Result<Self> {
        let value = serde_json::from_str(src).map_err(|e| Error::json(e, src, filename))?;
        Self::from_value(value)
    }

    /// Parse a TOML configuration (arrays of tables become child documents).
    pub fn from_toml_str(src: &str, filename: &str) -> Result<Self> {
        let value = toml::from_str::<Value>(src).map_err(|e| Error::toml(e, src, filename))?;
        Self::from_value(value)
    }

    /// Add a child document under `key` and return its id.
    pub fn add_child(
        &mut self,
        parent: DocumentId,
        key: &str,
        attributes: impl IntoIterator<Item = (String, Value)>,
    ) -> DocumentId {
        let id = DocumentId(self.entries.len());
        let siblings = self.entries[parent.0]
            .children
            .get(key)
            .map_or(0, Vec::len);
        let location = if parent.0 == 0 {
            format!("{}[{}]", key, siblings)
        } else {
            format!("{}.{}[{}]", self.entries[parent.0].location, key, siblings)
        };
        self.entries.push(Entry {
            parent: Some(parent),
            location,
            attributes: attributes.into_iter().collect(),
            children: IndexMap::new(),
        });
        self.entries[parent.0]
            .children
            .entry(key.to_string())
            .or_default()
            .push(id);
        id
    }

    /// The root document.
    pub fn root(&self) -> Document<'_> {
        Document {
            tree: self,
            id: DocumentId(0),
        }
    }

    /// Look up a document by id.
    pub fn get(&self, id: DocumentId) -> Option<Document<'_>> {
        (id.0 < self.entries.len()).then_some(Document { tree: self, id })
    }

    /// Number of documents, including the root.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn fill(&mut self, id: DocumentId, object: Map<String, Value>) {
        for (key, value) in object {
            match value {
                Value::Array(items) if is_document_list(&items) => {
                    for item in items {
                        if let Value::Object(child) = item {
                            let child_id = self.add_child(id, &key, []);
                            self.fill(child_id, child);
                        }
                    }
                }
                value => {
                    self.entries[id.0].attributes.insert(key, value);
                }
            }
        }
    }
}

fn is_document_list(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().all(Value::is_object)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A borrowed handle to one document in a tree.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    tree: &'a DocumentTree,
    id: DocumentId,
}

impl<'a> Document<'a> {
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Human readable position in the tree, e.g. `dbmses[0].schemas[1]`.
    pub fn location(&self) -> &'a str {
        &self.entry().location
    }

    /// Raw attribute lookup.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.entry().attributes.get(key)
    }

    /// String attribute, absent if missing or not a string.
    pub fn get_as_string(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Boolean attribute, absent if missing or not a boolean.
    pub fn get_as_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Integer attribute, absent if missing or not an integer.
    pub fn get_as_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Floating point attribute, absent if missing or not a number.
    pub fn get_as_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Required string attribute.
    pub fn require_string(&self, key: &str) -> Result<&'a str> {
        match self.get(key) {
            None | Some(Value::Null) => Err(Error::missing(key, self.location())),
            Some(Value::String(s)) if s.is_empty() => {
                Err(Error::invalid(key, self.location(), "a non-empty string"))
            }
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(Error::invalid(key, self.location(), "a string")),
        }
    }

    /// Optional string attribute that must be a string when present.
    pub fn try_string(&self, key: &str) -> Result<Option<&'a str>> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(Error::invalid(key, self.location(), "a string")),
        }
    }

    /// Boolean attribute with a default applied on absence.
    pub fn bool_or(&self, key: &str, default: bool) -> Result<bool> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(Error::invalid(key, self.location(), "a boolean")),
        }
    }

    /// The parent document, if this is not the root.
    pub fn parent(&self) -> Option<Document<'a>> {
        self.entry().parent.map(|id| Document {
            tree: self.tree,
            id,
        })
    }

    /// Parent, grandparent, ... up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = Document<'a>> + use<'a> {
        std::iter::successors(self.parent(), |d| d.parent())
    }

    /// Child documents stored under `key`, in declaration order.
    pub fn children(&self, key: &str) -> impl Iterator<Item = Document<'a>> + use<'a> {
        let tree = self.tree;
        self.entry()
            .children
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&id| Document { tree, id })
    }

    /// Keys of the attributes stored on this document.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.entry().attributes.keys().map(String::as_str)
    }

    fn entry(&self) -> &'a Entry {
        &self.tree.entries[self.id.0]
    }
}
