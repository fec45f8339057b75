//! Static per-entity metadata: display names for response messages, plural
//! forms for the bulk-insert response keys, and base table literals.

/// One warehouse entity backed by one logical table.
pub struct EntityMeta {
    /// Singular display name used in confirmation messages.
    pub name: &'static str,
    /// Plural form; bulk responses key their lists as `existing<Plural>` /
    /// `all<Plural>`.
    pub plural: &'static str,
    /// Base table literal; the deployment suffix is appended at runtime.
    pub table: &'static str,
}

pub const CATEGORY: EntityMeta = EntityMeta {
    name: "Category",
    plural: "Categories",
    table: "categories",
};

pub const PRODUCT: EntityMeta = EntityMeta {
    name: "Product",
    plural: "Products",
    table: "products",
};

pub const UNIT: EntityMeta = EntityMeta {
    name: "Unit",
    plural: "Units",
    table: "units",
};

pub const STOCK: EntityMeta = EntityMeta {
    name: "Stock",
    plural: "Stocks",
    table: "stocks",
};

pub const SUPPLIER: EntityMeta = EntityMeta {
    name: "Supplier",
    plural: "Suppliers",
    table: "suppliers",
};

pub const BILL: EntityMeta = EntityMeta {
    name: "Bill",
    plural: "Bills",
    table: "bills",
};

pub const WAREHOUSE_LOCATION: EntityMeta = EntityMeta {
    name: "Warehouse location",
    plural: "WarehouseLocations",
    table: "warehouse-location",
};
