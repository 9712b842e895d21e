//! Query-string handling for list requests.
//!
//! `?slug=eq.facelift&order=created_at.desc`: any number of equality
//! filters, at most one ordering key.

use std::cmp::Ordering;

use serde_json::Value;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: Vec<(String, String)>,
    pub order: Option<(String, bool)>,
}

impl ListQuery {
    /// Parse decoded query pairs. Errors name the offending parameter.
    pub fn parse(pairs: Vec<(String, String)>) -> Result<Self, String> {
        let mut query = ListQuery::default();
        for (key, value) in pairs {
            if key == "order" {
                let (field, direction) = value
                    .rsplit_once('.')
                    .ok_or_else(|| format!("order must be `field.asc` or `field.desc`, got `{value}`"))?;
                let descending = match direction {
                    "asc" => false,
                    "desc" => true,
                    other => return Err(format!("unknown order direction `{other}`")),
                };
                query.order = Some((field.to_string(), descending));
            } else {
                let expected = value
                    .strip_prefix("eq.")
                    .ok_or_else(|| format!("filter `{key}` must use `eq.`"))?;
                query.filters.push((key, expected.to_string()));
            }
        }
        Ok(query)
    }

    pub fn apply(&self, records: &[Value]) -> Vec<Value> {
        let mut out: Vec<Value> = records
            .iter()
            .filter(|record| {
                self.filters
                    .iter()
                    .all(|(field, expected)| matches_field(record.get(field), expected))
            })
            .cloned()
            .collect();
        if let Some((field, descending)) = &self.order {
            out.sort_by(|a, b| {
                let ord = compare(a.get(field), b.get(field));
                if *descending {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }
        out
    }
}

fn matches_field(value: Option<&Value>, expected: &str) -> bool {
    match value {
        Some(Value::String(s)) => s == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        Some(Value::Bool(b)) => b.to_string() == expected,
        _ => false,
    }
}

fn rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(_) => 4,
    }
}

/// Missing/null first, then booleans, numbers, strings; values of the same
/// type compare naturally.
fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}
