//! Canonical inventory and sales schemas.
//!
//! Each canonical field carries a static, ordered alias table covering the
//! labels seen across POS exports. Resolution runs once per load; downstream
//! stages address fields by canonical name only. Item name and on-hand
//! quantity are the only required inventory fields; every other column is
//! optional and merely unlocks derived features when present.

use chrono::NaiveDate;

use shelfwatch_tabular::{coerce, resolve, RawTable, SchemaError, SchemaResult};

pub const ITEM_NAME_ALIASES: &[&str] =
    &["itemname", "item name", "product", "product name", "item"];
pub const ON_HAND_ALIASES: &[&str] = &[
    "onhandunits",
    "available",
    "on hand units",
    "qty on hand",
    "quantity on hand",
    "units in stock",
];
pub const UNIT_COST_ALIASES: &[&str] = &[
    "unit cost",
    "cost",
    "current price",
    "cost per unit",
    "avg unit cost",
];
pub const EXPIRATION_ALIASES: &[&str] = &[
    "expiration date",
    "expiration",
    "exp date",
    "expires on",
    "sell by date",
];
pub const ROOM_ALIASES: &[&str] = &["room", "location", "room name", "inventory room"];
pub const CATEGORY_ALIASES: &[&str] = &[
    "category",
    "subcategory",
    "master category",
    "product category",
];
pub const STRAIN_ALIASES: &[&str] = &["strain", "strain name"];
pub const PACKAGE_SIZE_ALIASES: &[&str] = &["package size", "size", "unit size", "net weight"];

pub const SALES_ITEM_ALIASES: &[&str] =
    &["itemname", "item name", "product", "product name", "item"];
pub const SALES_QTY_ALIASES: &[&str] = &[
    "quantity sold",
    "qty sold",
    "units sold",
    "quantity",
    "qty",
];

/// Resolved column positions for an inventory snapshot.
#[derive(Clone, Debug)]
pub struct InventorySchema {
    pub name_col: usize,
    pub on_hand_col: usize,
    pub cost_col: Option<usize>,
    pub expiration_col: Option<usize>,
    pub room_col: Option<usize>,
    pub category_col: Option<usize>,
    pub strain_col: Option<usize>,
    pub package_size_col: Option<usize>,
}

impl InventorySchema {
    /// Resolve the schema against a table's headers.
    ///
    /// Fails only when a required column (item name, on-hand quantity) cannot
    /// be located; optional columns resolve to `None` silently.
    pub fn resolve(table: &RawTable) -> SchemaResult<Self> {
        let headers = &table.headers;
        let name_col = resolve::resolve_index(headers, ITEM_NAME_ALIASES)
            .ok_or_else(|| SchemaError::missing_column("itemname", ITEM_NAME_ALIASES))?;
        let on_hand_col = resolve::resolve_index(headers, ON_HAND_ALIASES)
            .ok_or_else(|| SchemaError::missing_column("onhandunits", ON_HAND_ALIASES))?;

        Ok(Self {
            name_col,
            on_hand_col,
            cost_col: resolve::resolve_index(headers, UNIT_COST_ALIASES),
            expiration_col: resolve::resolve_index(headers, EXPIRATION_ALIASES),
            room_col: resolve::resolve_index(headers, ROOM_ALIASES),
            category_col: resolve::resolve_index(headers, CATEGORY_ALIASES),
            strain_col: resolve::resolve_index(headers, STRAIN_ALIASES),
            package_size_col: resolve::resolve_index(headers, PACKAGE_SIZE_ALIASES),
        })
    }

    /// Whether the input carries a cost column at all. When it does not,
    /// cost is absent from aggregated output rather than coerced to zero.
    pub fn has_cost(&self) -> bool {
        self.cost_col.is_some()
    }

    /// Whether the input carries an expiration column at all.
    pub fn has_expiration(&self) -> bool {
        self.expiration_col.is_some()
    }

    /// Read one typed batch row. Quantity coerces to 0 on parse failure;
    /// cost and expiration stay absent on parse failure.
    pub fn read_row(&self, table: &RawTable, row: usize) -> BatchRow {
        let text = |col: Option<usize>| -> Option<String> {
            col.map(|c| table.cell(row, c).trim().to_string())
                .filter(|s| !s.is_empty())
        };

        BatchRow {
            name: table.cell(row, self.name_col).trim().to_string(),
            on_hand: coerce::to_number_or_zero(table.cell(row, self.on_hand_col)),
            unit_cost: self
                .cost_col
                .and_then(|c| coerce::to_number(table.cell(row, c))),
            expiration: self
                .expiration_col
                .and_then(|c| coerce::to_date(table.cell(row, c))),
            room: text(self.room_col),
            category: text(self.category_col),
            strain: text(self.strain_col),
            package_size: text(self.package_size_col),
        }
    }

    /// Read every row of the table.
    pub fn read_rows(&self, table: &RawTable) -> Vec<BatchRow> {
        (0..table.len()).map(|i| self.read_row(table, i)).collect()
    }
}

/// One physical lot of a SKU, typed against the canonical schema.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchRow {
    pub name: String,
    pub on_hand: f64,
    pub unit_cost: Option<f64>,
    pub expiration: Option<NaiveDate>,
    pub room: Option<String>,
    pub category: Option<String>,
    pub strain: Option<String>,
    pub package_size: Option<String>,
}

/// Resolved column positions for a sales transaction report.
#[derive(Clone, Debug)]
pub struct SalesSchema {
    pub name_col: usize,
    pub qty_col: usize,
}

impl SalesSchema {
    pub fn resolve(table: &RawTable) -> SchemaResult<Self> {
        let headers = &table.headers;
        let name_col = resolve::resolve_index(headers, SALES_ITEM_ALIASES)
            .ok_or_else(|| SchemaError::missing_column("itemname", SALES_ITEM_ALIASES))?;
        let qty_col = resolve::resolve_index(headers, SALES_QTY_ALIASES)
            .ok_or_else(|| SchemaError::missing_column("quantity sold", SALES_QTY_ALIASES))?;
        Ok(Self { name_col, qty_col })
    }

    /// Read every sale row. Quantity coerces to 0 on parse failure.
    pub fn read_rows(&self, table: &RawTable) -> Vec<SalesRow> {
        (0..table.len())
            .map(|i| SalesRow {
                name: table.cell(i, self.name_col).trim().to_string(),
                qty: coerce::to_number_or_zero(table.cell(i, self.qty_col)),
            })
            .collect()
    }
}

/// One sale event inside the lookback window.
#[derive(Clone, Debug, PartialEq)]
pub struct SalesRow {
    pub name: String,
    pub qty: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory_table() -> RawTable {
        RawTable::new(
            vec![
                "Product".into(),
                "ROOM".into(),
                "Available".into(),
                "Current Price".into(),
                "Expiration Date".into(),
                "Category".into(),
            ],
            vec![
                vec![
                    "Blue Dream 3.5g".into(),
                    "Vault".into(),
                    "120".into(),
                    "$4.25".into(),
                    "2026-09-12".into(),
                    "Flower".into(),
                ],
                vec![
                    "Sour Diesel 1g".into(),
                    "Quarantine".into(),
                    "n/a".into(),
                    "bad".into(),
                    "soon".into(),
                    "".into(),
                ],
            ],
        )
    }

    #[test]
    fn resolves_heterogeneous_headers() {
        let schema = InventorySchema::resolve(&inventory_table()).unwrap();
        assert_eq!(schema.name_col, 0);
        assert_eq!(schema.on_hand_col, 2);
        assert_eq!(schema.cost_col, Some(3));
        assert_eq!(schema.expiration_col, Some(4));
        assert_eq!(schema.room_col, Some(1));
        assert_eq!(schema.category_col, Some(5));
        assert!(schema.strain_col.is_none());
        assert!(schema.has_cost());
        assert!(schema.has_expiration());
    }

    #[test]
    fn missing_required_column_is_schema_error() {
        let table = RawTable::new(vec!["Product".into()], vec![]);
        let err = InventorySchema::resolve(&table).unwrap_err();
        assert!(err.to_string().contains("onhandunits"));
    }

    #[test]
    fn optional_columns_absent_resolve_silently() {
        let table = RawTable::new(vec!["Product".into(), "Available".into()], vec![]);
        let schema = InventorySchema::resolve(&table).unwrap();
        assert!(!schema.has_cost());
        assert!(!schema.has_expiration());
        assert!(schema.room_col.is_none());
    }

    #[test]
    fn typed_rows_coerce_per_field_policy() {
        let table = inventory_table();
        let schema = InventorySchema::resolve(&table).unwrap();
        let rows = schema.read_rows(&table);

        assert_eq!(rows[0].on_hand, 120.0);
        assert_eq!(rows[0].unit_cost, Some(4.25));
        assert_eq!(
            rows[0].expiration,
            NaiveDate::from_ymd_opt(2026, 9, 12)
        );
        assert_eq!(rows[0].category.as_deref(), Some("Flower"));

        // Unparseable quantity falls back to 0; unparseable cost and date
        // stay absent; empty category stays absent.
        assert_eq!(rows[1].on_hand, 0.0);
        assert_eq!(rows[1].unit_cost, None);
        assert_eq!(rows[1].expiration, None);
        assert_eq!(rows[1].category, None);
    }

    #[test]
    fn sales_schema_requires_name_and_quantity() {
        let table = RawTable::new(
            vec!["Item Name".into(), "Qty Sold".into()],
            vec![vec!["Blue Dream 3.5g".into(), "7".into()]],
        );
        let schema = SalesSchema::resolve(&table).unwrap();
        let rows = schema.read_rows(&table);
        assert_eq!(rows[0].name, "Blue Dream 3.5g");
        assert_eq!(rows[0].qty, 7.0);

        let bad = RawTable::new(vec!["Item Name".into()], vec![]);
        assert!(SalesSchema::resolve(&bad).is_err());
    }
}
