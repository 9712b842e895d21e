//! Collections and list options understood by the hosted data service.
//!
//! `ListOptions` carries at most one equality filter and at most one
//! ordering key. The same options serialize to the wire query string and
//! evaluate locally in `MemoryStore`, so both stores agree on semantics.

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

/// A named set of records of one kind held by the data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Procedures,
    BlogPosts,
    Testimonials,
    Consultations,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Procedures,
        Collection::BlogPosts,
        Collection::Testimonials,
        Collection::Consultations,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Procedures => "procedures",
            Collection::BlogPosts => "blog_posts",
            Collection::Testimonials => "testimonials",
            Collection::Consultations => "consultations",
        }
    }

    /// Only consultation requests are ever written by this application.
    pub fn accepts_writes(self) -> bool {
        matches!(self, Collection::Consultations)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

/// Options for a single `list` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub filter: Option<Filter>,
    pub order_by: Option<OrderBy>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only records whose `field` equals `value`.
    pub fn filter_eq(mut self, field: &str, value: &str) -> Self {
        self.filter = Some(Filter {
            field: field.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.order_by = Some(OrderBy {
            field: field.to_string(),
            direction,
        });
        self
    }

    /// Render as a URL query string (without the leading `?`), e.g.
    /// `slug=eq.rhinoplasty&order=created_at.desc`. Empty when no options
    /// are set.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(filter) = &self.filter {
            parts.push(format!(
                "{}=eq.{}",
                encode_component(&filter.field),
                encode_component(&filter.value)
            ));
        }
        if let Some(order) = &self.order_by {
            parts.push(format!(
                "order={}.{}",
                encode_component(&order.field),
                order.direction.as_str()
            ));
        }
        parts.join("&")
    }

    /// Evaluate these options over an in-memory record set. The sort is
    /// stable, so records with equal keys keep their stored order.
    pub fn apply(&self, records: impl IntoIterator<Item = Value>) -> Vec<Value> {
        let mut out: Vec<Value> = records
            .into_iter()
            .filter(|record| match &self.filter {
                Some(filter) => field_equals(record.get(&filter.field), &filter.value),
                None => true,
            })
            .collect();

        if let Some(order) = &self.order_by {
            out.sort_by(|a, b| {
                let ord = compare_values(a.get(&order.field), b.get(&order.field));
                match order.direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            });
        }
        out
    }
}

fn field_equals(field: Option<&Value>, expected: &str) -> bool {
    match field {
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

/// Total order over JSON field values: missing/null first, then booleans,
/// numbers, strings. RFC 3339 timestamps in the same offset sort correctly
/// as strings.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Percent-encode `input` the way `encodeURIComponent` does: everything
/// except ASCII alphanumerics and `-_.!~*'()` is escaped byte by byte.
pub fn encode_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}

/// Inverse of [`encode_component`]. `%XX` escapes become bytes; a `%` not
/// followed by two hex digits is kept literally. Invalid UTF-8 is replaced
/// with U+FFFD.
pub fn decode_component(input: &str) -> String {
    fn hex(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex(bytes[i + 1]), hex(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
