//! Pagination for admin listings.

/// Query for a paginated listing (`?page=&limit=&name=`).
///
/// `name` is a server-side filter; `*` matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
    pub name: String,
}

impl PageRequest {
    /// Wildcard name filter.
    pub const ANY_NAME: &'static str = "*";

    /// First page of `limit` entries matching everything.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            page: 0,
            limit,
            name: Self::ANY_NAME.to_owned(),
        }
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The request for the following page.
    #[must_use]
    pub fn next(&self) -> Self {
        self.clone().page(self.page.saturating_add(1))
    }

    /// Query pairs in wire order.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("name", self.name.clone()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageRequest::default();
        assert_eq!(page.page, 0);
        assert_eq!(page.limit, 10);
        assert_eq!(page.name, "*");
    }

    #[test]
    fn test_next_keeps_filter() {
        let page = PageRequest::new(5).name("Kai").next();
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 5);
        assert_eq!(page.name, "Kai");
    }
}
