// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The tag tree: a namespaced name, an ordered value list, a sorted attribute map, and children.

use std::collections::BTreeMap;

use crate::error::CoercionError;
use crate::identifier::{validate_identifier, validate_identifier_allow_empty};
use crate::keyword::CONTENT_TAG_NAME;
use crate::serializer::serialize_tag;
use crate::value::{IntoValue, Value};

/// One SDL tag: `namespace:name values... attr=value... { children }`.
///
/// Two tags are equal when their canonical serializations are equal, not when their fields are
/// structurally identical — this makes attribute order irrelevant to equality, since attributes
/// are always emitted in ascending key order regardless of insertion order.
#[derive(Debug, Clone)]
pub struct Tag {
    namespace: String,
    name: String,
    values: Vec<Value>,
    attributes: BTreeMap<String, (String, Value)>,
    children: Vec<Tag>,
}

impl Tag {
    /// Creates an unnamespaced tag named `name`.
    pub fn new(name: &str) -> Result<Self, CoercionError> {
        Tag::with_namespace("", name)
    }

    /// Creates a tag with an explicit namespace (pass `""` for none).
    pub fn with_namespace(namespace: &str, name: &str) -> Result<Self, CoercionError> {
        validate_identifier_allow_empty(namespace)?;
        validate_identifier(name)?;
        Ok(Tag {
            namespace: namespace.to_string(),
            name: name.to_string(),
            values: Vec::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn children(&self) -> &[Tag] {
        &self.children
    }

    /// Returns `true` if this is the anonymous `content` tag synthesized for a value-only line.
    pub fn is_anonymous(&self) -> bool {
        self.namespace.is_empty() && self.name == CONTENT_TAG_NAME
    }

    /// Looks up an unnamespaced attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name).map(|(_, v)| v)
    }

    /// Looks up a namespaced attribute by namespace and name.
    pub fn attribute_namespaced(&self, namespace: &str, name: &str) -> Option<&Value> {
        self.attributes
            .get(name)
            .filter(|(ns, _)| ns == namespace)
            .map(|(_, v)| v)
    }

    /// Iterates attributes in ascending key order, yielding `(namespace, name, value)`.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str, &Value)> {
        self.attributes
            .iter()
            .map(|(name, (ns, v))| (ns.as_str(), name.as_str(), v))
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), CoercionError> {
        validate_identifier(name)?;
        self.name = name.to_string();
        Ok(())
    }

    pub fn set_namespace(&mut self, namespace: &str) -> Result<(), CoercionError> {
        validate_identifier_allow_empty(namespace)?;
        self.namespace = namespace.to_string();
        Ok(())
    }

    pub fn push_value<T: IntoValue>(&mut self, value: T) -> Result<(), CoercionError> {
        self.values.push(value.into_value()?);
        Ok(())
    }

    pub fn set_attribute<T: IntoValue>(
        &mut self,
        namespace: &str,
        name: &str,
        value: T,
    ) -> Result<(), CoercionError> {
        validate_identifier_allow_empty(namespace)?;
        validate_identifier(name)?;
        let value = value.into_value()?;
        self.attributes
            .insert(name.to_string(), (namespace.to_string(), value));
        Ok(())
    }

    pub fn push_child(&mut self, child: Tag) {
        self.children.push(child);
    }

    /// Renders this tag (and its subtree) in canonical CRLF form, with `indent` levels of leading
    /// indentation.
    pub fn serialize(&self, indent: usize) -> String {
        serialize_tag(self, indent)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.serialize(0) == other.serialize(0)
    }
}

impl Eq for Tag {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_name() {
        assert!(Tag::new("1bad").is_err());
    }

    #[test]
    fn attribute_order_does_not_affect_equality() {
        let mut a = Tag::new("foo").unwrap();
        a.set_attribute("", "x", 1i32).unwrap();
        a.set_attribute("", "y", 2i32).unwrap();

        let mut b = Tag::new("foo").unwrap();
        b.set_attribute("", "y", 2i32).unwrap();
        b.set_attribute("", "x", 1i32).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn is_anonymous_detects_content_tag() {
        let content = Tag::new(CONTENT_TAG_NAME).unwrap();
        assert!(content.is_anonymous());
        let named = Tag::new("foo").unwrap();
        assert!(!named.is_anonymous());
    }
}
