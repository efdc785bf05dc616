//! JSON array encoding for list-valued SQL arguments and results.
//!
//! SQL engines without an array type pass lists as JSON text: integer
//! indexes as JSON numbers, addresses and WKT as JSON strings.

use serde_json::Value;

use crate::error::{H3UdfError, Result};
use crate::index::IndexRepr;

/// A list of indexes in one of the two SQL forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexList {
    Indexes(Vec<i64>),
    Addresses(Vec<String>),
}

impl IndexList {
    /// The same indexes in address form.
    pub fn into_addresses(self) -> Vec<String> {
        match self {
            IndexList::Indexes(h3) => h3
                .into_iter()
                .map(|h| String::from_index(h as u64))
                .collect(),
            IndexList::Addresses(h3) => h3,
        }
    }
}

/// Parse `[1, 2]` or `["8b..", "8b.."]`. An empty array is an empty integer
/// list; mixing numbers and strings is rejected.
///
/// # Example
///
/// ```
/// use h3_udf_core::list::{parse_index_list, IndexList};
///
/// assert_eq!(
///     parse_index_list(r#"["8b754e649929fff"]"#).unwrap(),
///     IndexList::Addresses(vec!["8b754e649929fff".to_string()])
/// );
/// ```
pub fn parse_index_list(json: &str) -> Result<IndexList> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    if !values.is_empty() && values.iter().all(Value::is_string) {
        let addresses = values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect();
        return Ok(IndexList::Addresses(addresses));
    }
    values
        .iter()
        .map(|v| {
            v.as_i64().ok_or_else(|| {
                H3UdfError::InvalidArgument(format!(
                    "index list must hold only integers or only strings, found {v}"
                ))
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(IndexList::Indexes)
}

/// Parse `["POINT (0 0)", ...]`.
pub fn parse_text_list(json: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse `[["POINT (0 0)", ...], ...]`.
pub fn parse_nested_text_list(json: &str) -> Result<Vec<Vec<String>>> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a list result as JSON text.
///
/// # Example
///
/// ```
/// use h3_udf_core::list::to_json;
///
/// assert_eq!(to_json(vec![1_i64, 2]), "[1,2]");
/// assert_eq!(to_json(vec!["a".to_string()]), r#"["a"]"#);
/// ```
pub fn to_json(values: impl Into<Value>) -> String {
    values.into().to_string()
}
