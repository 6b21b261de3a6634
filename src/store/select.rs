/// Ordering applied by the store before rows are returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

/// A read of one collection: `select columns from collection [order by ...] [limit n]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Select {
    pub collection: &'static str,
    pub columns: &'static str,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Select {
    /// Select every column of `collection`.
    pub fn collection(collection: &'static str) -> Self {
        Self {
            collection,
            columns: "*",
            order: None,
            limit: None,
        }
    }

    pub fn columns(mut self, columns: &'static str) -> Self {
        self.columns = columns;
        self
    }

    pub fn order_by(mut self, column: &'static str, ascending: bool) -> Self {
        self.order = Some(Order { column, ascending });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// PostgREST query parameters, e.g. `select=*&order=created_at.desc&limit=1`.
    pub fn query_string(&self) -> String {
        let mut params = vec![format!("select={}", self.columns)];

        if let Some(order) = self.order {
            let direction = if order.ascending { "asc" } else { "desc" };
            params.push(format!("order={}.{}", order.column, direction));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }

        params.join("&")
    }
}
