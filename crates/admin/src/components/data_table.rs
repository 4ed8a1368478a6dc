//! Data table component types.
//!
//! These types describe the header, search box and filter dropdowns of the
//! admin list pages. Rows are rendered by each page's own template; the
//! filter form submits with GET so every filtered view has its own URL.

/// Column definition for a data table.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub key: &'static str,
    pub label: &'static str,
    /// Right-align the column (numbers and actions).
    pub numeric: bool,
}

impl TableColumn {
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            numeric: false,
        }
    }

    /// Create a right-aligned column.
    #[must_use]
    pub const fn numeric(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            numeric: true,
        }
    }
}

/// Option for a select filter.
#[derive(Debug, Clone)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl FilterOption {
    #[must_use]
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            selected: false,
        }
    }
}

/// A single-select filter rendered as a `<select>`.
#[derive(Debug, Clone)]
pub struct TableFilter {
    /// Query parameter name.
    pub key: &'static str,
    pub label: &'static str,
    pub options: Vec<FilterOption>,
}

impl TableFilter {
    #[must_use]
    pub const fn select(key: &'static str, label: &'static str, options: Vec<FilterOption>) -> Self {
        Self {
            key,
            label,
            options,
        }
    }

    /// Mark the option matching `value` as selected, or the first option
    /// when nothing matches.
    fn select_value(&mut self, value: &str) {
        let matched = self.options.iter().any(|o| o.value == value);
        for (index, option) in self.options.iter_mut().enumerate() {
            option.selected = if matched {
                option.value == value
            } else {
                index == 0
            };
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone)]
pub struct DataTableConfig {
    /// Unique table identifier, used as the element id.
    pub table_id: &'static str,
    pub columns: Vec<TableColumn>,
    pub filters: Vec<TableFilter>,
    pub search_placeholder: &'static str,
    /// Current search text.
    pub search: String,
    pub empty_title: &'static str,
    pub empty_description: Option<&'static str>,
}

impl DataTableConfig {
    #[must_use]
    pub const fn new(table_id: &'static str) -> Self {
        Self {
            table_id,
            columns: vec![],
            filters: vec![],
            search_placeholder: "Search...",
            search: String::new(),
            empty_title: "No items found",
            empty_description: None,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub const fn search_placeholder(mut self, placeholder: &'static str) -> Self {
        self.search_placeholder = placeholder;
        self
    }

    #[must_use]
    pub const fn empty_state(
        mut self,
        title: &'static str,
        description: Option<&'static str>,
    ) -> Self {
        self.empty_title = title;
        self.empty_description = description;
        self
    }

    /// Fill in the current search text and filter selections.
    #[must_use]
    pub fn with_values(mut self, search: &str, selections: &[(&str, &str)]) -> Self {
        self.search = search.to_string();
        for filter in &mut self.filters {
            let value = selections
                .iter()
                .find(|(key, _)| *key == filter.key)
                .map_or("", |(_, value)| *value);
            filter.select_value(value);
        }
        self
    }

    /// Whether any search text or non-default filter is applied.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty()
            || self
                .filters
                .iter()
                .any(|f| f.options.iter().skip(1).any(|o| o.selected))
    }
}

/// Build the products table configuration.
#[must_use]
pub fn products_table_config() -> DataTableConfig {
    DataTableConfig::new("products")
        .column(TableColumn::new("name", "Product"))
        .column(TableColumn::new("category", "Category"))
        .column(TableColumn::numeric("price", "Price"))
        .column(TableColumn::numeric("stock", "Stock"))
        .column(TableColumn::numeric("inquiries", "Inquiries"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::numeric("actions", "Actions"))
        .filter(TableFilter::select(
            "status",
            "Status",
            vec![
                FilterOption::new("all", "All Status"),
                FilterOption::new("active", "Active"),
                FilterOption::new("out_of_stock", "Out of Stock"),
            ],
        ))
        .search_placeholder("Search products...")
        .empty_state(
            "No products found",
            Some("Try adjusting your search or filters"),
        )
}

/// Build the inquiries table configuration.
#[must_use]
pub fn inquiries_table_config() -> DataTableConfig {
    DataTableConfig::new("inquiries")
        .column(TableColumn::new("customer", "Customer"))
        .column(TableColumn::new("product", "Product"))
        .column(TableColumn::new("message", "Message"))
        .column(TableColumn::new("date", "Date"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::numeric("actions", "Actions"))
        .filter(TableFilter::select(
            "status",
            "Status",
            vec![
                FilterOption::new("all", "All Status"),
                FilterOption::new("pending", "Pending"),
                FilterOption::new("responded", "Responded"),
            ],
        ))
        .search_placeholder("Search inquiries...")
        .empty_state(
            "No inquiries found",
            Some("Try adjusting your search or filters"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(config: &DataTableConfig) -> Vec<&'static str> {
        config
            .filters
            .iter()
            .flat_map(|f| f.options.iter().filter(|o| o.selected).map(|o| o.value))
            .collect()
    }

    #[test]
    fn test_known_value_is_selected() {
        let config = products_table_config().with_values("", &[("status", "out_of_stock")]);
        assert_eq!(selected(&config), vec!["out_of_stock"]);
        assert!(config.is_filtered());
    }

    #[test]
    fn test_unknown_value_selects_first_option() {
        let config = inquiries_table_config().with_values("", &[("status", "archived")]);
        assert_eq!(selected(&config), vec!["all"]);
        assert!(!config.is_filtered());
    }

    #[test]
    fn test_search_text_counts_as_filter() {
        let config = inquiries_table_config().with_values("sarah", &[]);
        assert_eq!(config.search, "sarah");
        assert!(config.is_filtered());
    }
}
