//! Purchase requisition query and its OData parameter mapping.
//!
//! ```rust
//! use rupstream::RequisitionQuery;
//!
//! let query = RequisitionQuery::new(3).with_select("Plant,Quantity").with_filter("");
//!
//! assert_eq!(query.to_query_string(), "$top=3&$select=Plant,Quantity");
//! ```

pub const DEFAULT_TOP: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequisitionQuery {
    pub top: u32,
    pub select: Option<String>,
    pub filter: Option<String>,
}

impl Default for RequisitionQuery {
    fn default() -> Self {
        Self::new(DEFAULT_TOP)
    }
}

impl RequisitionQuery {
    pub fn new(top: u32) -> Self {
        Self {
            top,
            select: None,
            filter: None,
        }
    }

    /// Sets `$select`. Blank values leave it unset.
    pub fn with_select(mut self, select: impl Into<String>) -> Self {
        self.select = non_blank(select.into());
        self
    }

    /// Sets `$filter`. Blank values leave it unset.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = non_blank(filter.into());
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("$top", self.top.to_string())];
        if let Some(select) = &self.select {
            pairs.push(("$select", select.clone()));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("$filter", filter.clone()));
        }
        pairs
    }

    /// Unencoded query string, for logs and diagnostics.
    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
