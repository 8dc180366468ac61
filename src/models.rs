use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One node of the movie dataset tree.
///
/// The public dataset nests `root -> category -> movie`; only the leaves carry
/// `value` and `category`. An absent or empty `children` list makes a leaf.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Some feeds encode `value` as a string, others as a number.
    /// Accept both and normalize to `f64`.
    #[serde(
        default,
        deserialize_with = "de_opt_f64_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DatasetNode>,
}

/// Problems found by [`DatasetNode::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("leaf `{name}` has no value")]
    MissingValue { name: String },
    #[error("node `{name}` has invalid value {value} (must be finite and non-negative)")]
    InvalidValue { name: String, value: f64 },
}

impl DatasetNode {
    /// Convenience constructor for a leaf.
    pub fn leaf(name: impl Into<String>, category: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            category: Some(category.into()),
            value: Some(value),
            children: Vec::new(),
        }
    }

    /// Convenience constructor for an internal node.
    pub fn group(name: impl Into<String>, children: Vec<DatasetNode>) -> Self {
        Self {
            name: name.into(),
            category: None,
            value: None,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Check the invariants the layout relies on: every leaf has a value and
    /// all values are finite and non-negative.
    pub fn validate(&self) -> Result<(), DatasetError> {
        match self.value {
            None if self.is_leaf() => {
                return Err(DatasetError::MissingValue {
                    name: self.name.clone(),
                });
            }
            Some(v) if !v.is_finite() || v < 0.0 => {
                return Err(DatasetError::InvalidValue {
                    name: self.name.clone(),
                    value: v,
                });
            }
            _ => {}
        }
        self.children.iter().try_for_each(DatasetNode::validate)
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(DatasetNode::leaf_count).sum()
        }
    }
}

/// Serde helper: parse an optional `f64` from a JSON number, a numeric string, or null.
fn de_opt_f64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct F64Visitor;

    impl<'de> Visitor<'de> for F64Visitor {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number or a string containing a number")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v as f64))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v as f64))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<f64>().map(Some).map_err(E::custom)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(F64Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_and_number_values_decode() {
        let json = r#"{"name":"Movies","children":[
            {"name":"Avatar ","category":"Action","value":"760505847"},
            {"name":"Up","category":"Animation","value":293004164}
        ]}"#;
        let root: DatasetNode = serde_json::from_str(json).unwrap();
        assert_eq!(root.children[0].value, Some(760_505_847.0));
        assert_eq!(root.children[1].value, Some(293_004_164.0));
        assert!(root.validate().is_ok());
        assert_eq!(root.leaf_count(), 2);
    }

    #[test]
    fn leaf_without_value_is_rejected() {
        let root = DatasetNode::group(
            "root",
            vec![DatasetNode {
                name: "Nameless".into(),
                category: Some("Drama".into()),
                value: None,
                children: vec![],
            }],
        );
        assert_eq!(
            root.validate(),
            Err(DatasetError::MissingValue {
                name: "Nameless".into()
            })
        );
    }
}
