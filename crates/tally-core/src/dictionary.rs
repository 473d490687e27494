//! Tree-shaped translation dictionaries.
//!
//! A dictionary maps a path segment to either a nested dictionary or a leaf
//! string. Lookups walk a dotted key one segment at a time and fail closed:
//! they never index into a leaf and never treat a non-string terminal as a hit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A value stored under one dictionary segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Leaf(String),
    Branch(TranslationDictionary),
    /// Anything the server sent that is neither a string nor an object.
    Opaque(serde_json::Value),
}

/// Why a dotted-path lookup produced no string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionMiss {
    /// The key was empty.
    EmptyKey,
    /// No entry exists for `segment` at `depth` (0-based).
    MissingSegment { segment: String, depth: usize },
    /// The path continues below a leaf.
    NotABranch { segment: String },
    /// The path ends on a nested dictionary or a non-string value.
    NotALeaf,
}

impl fmt::Display for ResolutionMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => f.write_str("empty key"),
            Self::MissingSegment { segment, depth } => {
                write!(f, "no entry for '{segment}' at depth {depth}")
            }
            Self::NotABranch { segment } => write!(f, "'{segment}' is a leaf, not a namespace"),
            Self::NotALeaf => f.write_str("path does not end on a string"),
        }
    }
}

/// Segment → node mapping. Ordered so that flattening and serialization are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationDictionary {
    entries: BTreeMap<String, TranslationNode>,
}

impl TranslationDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from `(dotted.key, value)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut dict = Self::new();
        for (key, value) in pairs {
            dict.insert_path(key, value);
        }
        dict
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direct child lookup, no path splitting.
    pub fn get(&self, segment: &str) -> Option<&TranslationNode> {
        self.entries.get(segment)
    }

    /// Insert a node under a single segment, replacing any previous node.
    pub fn insert(&mut self, segment: impl Into<String>, node: TranslationNode) {
        self.entries.insert(segment.into(), node);
    }

    /// Insert a leaf at a dotted path, creating intermediate namespaces.
    ///
    /// A leaf standing where a namespace is needed is replaced by the namespace.
    pub fn insert_path(&mut self, path: &str, value: impl Into<String>) {
        let mut segments: Vec<&str> = path.split('.').collect();
        let Some(last) = segments.pop() else {
            return;
        };
        let mut current = self;
        for segment in segments {
            let node = current
                .entries
                .entry(segment.to_string())
                .or_insert_with(|| TranslationNode::Branch(TranslationDictionary::new()));
            if !matches!(node, TranslationNode::Branch(_)) {
                *node = TranslationNode::Branch(TranslationDictionary::new());
            }
            current = match node {
                TranslationNode::Branch(dict) => dict,
                _ => return,
            };
        }
        current
            .entries
            .insert(last.to_string(), TranslationNode::Leaf(value.into()));
    }

    /// Resolve a dotted path to its leaf string.
    pub fn lookup(&self, path: &str) -> Result<&str, ResolutionMiss> {
        if path.is_empty() {
            return Err(ResolutionMiss::EmptyKey);
        }
        let mut current = self;
        let mut segments = path.split('.').enumerate().peekable();
        while let Some((depth, segment)) = segments.next() {
            let node = current
                .entries
                .get(segment)
                .ok_or_else(|| ResolutionMiss::MissingSegment {
                    segment: segment.to_string(),
                    depth,
                })?;
            let is_last = segments.peek().is_none();
            match (node, is_last) {
                (TranslationNode::Leaf(value), true) => return Ok(value),
                (TranslationNode::Branch(dict), false) => current = dict,
                (_, true) => return Err(ResolutionMiss::NotALeaf),
                (_, false) => {
                    return Err(ResolutionMiss::NotABranch {
                        segment: segment.to_string(),
                    })
                }
            }
        }
        Err(ResolutionMiss::NotALeaf)
    }

    /// Nested namespace at a dotted path, if the path ends on one.
    pub fn namespace(&self, path: &str) -> Option<&TranslationDictionary> {
        let mut current = self;
        for segment in path.split('.') {
            match current.entries.get(segment)? {
                TranslationNode::Branch(dict) => current = dict,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Shallow overlay: every top-level entry of `top` replaces the entry of
    /// the same name in `self` wholesale. Nested keys are not merged.
    pub fn overlay(&self, top: &TranslationDictionary) -> TranslationDictionary {
        let mut merged = self.clone();
        for (segment, node) in &top.entries {
            merged.entries.insert(segment.clone(), node.clone());
        }
        merged
    }

    /// Top-level namespace names.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Every leaf as `(dotted.key, value)`, in key order.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for (segment, node) in &self.entries {
            let key = if prefix.is_empty() {
                segment.clone()
            } else {
                format!("{prefix}.{segment}")
            };
            match node {
                TranslationNode::Leaf(value) => out.push((key, value.clone())),
                TranslationNode::Branch(dict) => dict.flatten_into(&key, out),
                TranslationNode::Opaque(_) => {}
            }
        }
    }
}
