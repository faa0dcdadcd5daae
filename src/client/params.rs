//! Query parameters for list requests
//!
//! List endpoints accept a `search` expression in the service's SQL-like
//! syntax (`username is 'alice'`) and a `size` page size. There is no page
//! loop: callers that want everything ask for [`MAX_PAGE_SIZE`] items at once.

use std::fmt;

/// Page size used when every record is wanted in one call.
///
/// Collections larger than this are truncated.
pub const MAX_PAGE_SIZE: usize = 10000;

/// A search expression made of `field is 'value'` terms joined by `and`.
///
/// # Example
/// ```ignore
/// let search = Search::is("sku", "addon-foo").and_is("type", "Manual");
/// assert_eq!(search.as_str(), "sku is 'addon-foo' and type is 'Manual'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search(String);

impl Search {
    /// Start a search with a single equality term.
    pub fn is(field: &str, value: &str) -> Self {
        Self(term(field, value))
    }

    /// Add another equality term.
    pub fn and_is(mut self, field: &str, value: &str) -> Self {
        self.0.push_str(" and ");
        self.0.push_str(&term(field, value));
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn term(field: &str, value: &str) -> String {
    // Single quotes inside a literal are doubled.
    format!("{} is '{}'", field, value.replace('\'', "''"))
}

/// Parameters for list requests.
///
/// Use the builder pattern to configure options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Search expression
    pub search: Option<Search>,
    /// Number of items per page
    pub size: Option<usize>,
}

impl ListParams {
    /// Create new params with no search and the service's default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search expression.
    pub fn search(mut self, search: Search) -> Self {
        self.search = Some(search);
        self
    }

    /// Set the page size.
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Ask for everything in a single page.
    pub fn all() -> Self {
        Self::new().size(MAX_PAGE_SIZE)
    }

    /// Convert to query string parameters.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(ref search) = self.search {
            params.push(("search", search.as_str().to_string()));
        }

        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }

        params
    }

    /// Whether `search` matches the given expression exactly.
    ///
    /// A missing search matches everything.
    #[cfg(test)]
    pub fn matches(&self, candidate: &Search) -> bool {
        match self.search {
            Some(ref search) => search == candidate,
            None => true,
        }
    }
}
