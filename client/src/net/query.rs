//! Table query paths in the backend's REST filter syntax.
//!
//! DESIGN
//! ======
//! Paths are built as plain strings so every query a page issues can be
//! asserted in unit tests without a browser. Filter values are URL-encoded;
//! `select`, `or`, and `order` fragments are composed by this crate and
//! passed through verbatim.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A `GET`/`PATCH` target against one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableQuery {
    table: String,
    params: Vec<(String, String)>,
    orders: Vec<String>,
}

impl TableQuery {
    pub fn new(table: &str) -> Self {
        Self { table: table.to_owned(), params: Vec::new(), orders: Vec::new() }
    }

    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_owned(), compact(columns)));
        self
    }

    /// `column = value`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_owned(), format!("eq.{}", urlencoding::encode(value))));
        self
    }

    /// Any of the given `column.op.value` conditions.
    #[must_use]
    pub fn or(mut self, conditions: &[String]) -> Self {
        self.params.push(("or".to_owned(), format!("({})", conditions.join(","))));
        self
    }

    #[must_use]
    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.orders.push(format!("{column}.{}", order.as_str()));
        self
    }

    /// Order with nulls sorted after values.
    #[must_use]
    pub fn order_nulls_last(mut self, column: &str, order: Order) -> Self {
        self.orders.push(format!("{column}.{}.nullslast", order.as_str()));
        self
    }

    #[must_use]
    pub fn limit(mut self, n: usize) -> Self {
        self.params.push(("limit".to_owned(), n.to_string()));
        self
    }

    /// Table path with query string, relative to the REST root.
    pub fn to_path(&self) -> String {
        let mut parts: Vec<String> = self.params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        if !self.orders.is_empty() {
            parts.push(format!("order={}", self.orders.join(",")));
        }
        if parts.is_empty() {
            self.table.clone()
        } else {
            format!("{}?{}", self.table, parts.join("&"))
        }
    }
}

/// `column.eq.value` condition for use inside `or`.
pub fn cond_eq(column: &str, value: &str) -> String {
    format!("{column}.eq.{}", urlencoding::encode(value))
}

/// Strip whitespace so multi-line select lists stay readable in source.
fn compact(columns: &str) -> String {
    columns.split_whitespace().collect()
}

/// `rpc/<name>` path for a remote procedure.
pub fn rpc_path(function: &str) -> String {
    format!("rpc/{function}")
}
