//! Client-side free-text search over an already loaded record set.

use crate::types::{BlogPost, Procedure};

/// Records that can be matched by a search box.
pub trait Searchable {
    fn search_fields(&self) -> [&str; 2];
}

impl Searchable for Procedure {
    fn search_fields(&self) -> [&str; 2] {
        [self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> [&str; 2] {
        [self.title.as_str(), self.content.as_str()]
    }
}

/// Case-insensitive substring match against each record's search fields.
/// A blank term keeps everything. Input order is preserved.
pub fn search<'a, T: Searchable>(records: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| {
            record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
