use crate::domain::errors::StorageError;
use crate::domain::shared::value_objects::ProductId;

/// One cart line: a catalog product plus how many units of it the shopper
/// wants. `unit_price` is in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: u64,
    pub image: Option<String>,
    pub quantity: u32,
}

pub struct NewLineItemProps {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: u64,
    pub image: Option<String>,
}

impl LineItem {
    /// A freshly added line always starts at one unit; repeat adds bump the
    /// quantity on the existing line instead of creating a new one.
    pub fn new(props: NewLineItemProps) -> Self {
        Self {
            product_id: props.product_id,
            name: props.name,
            unit_price: props.unit_price,
            image: props.image,
            quantity: 1,
        }
    }

    /// Constructor for data already persisted in the storage slot (no validation).
    pub fn from_storage(
        product_id: ProductId,
        name: String,
        unit_price: u64,
        image: Option<String>,
        quantity: u32,
    ) -> Self {
        Self {
            product_id,
            name,
            unit_price,
            image,
            quantity,
        }
    }

    pub fn line_total(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}

/// Ordered collection of cart lines, keyed by product id. Lines keep their
/// insertion order; a product appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuilds a cart from a persisted snapshot, repairing what the
    /// invariants forbid: zero quantities are raised to one and lines that
    /// repeat a product id are merged into the first occurrence, summing
    /// their quantities.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for mut item in items {
            item.quantity = item.quantity.max(1);
            match cart.position(&item.product_id) {
                Some(index) => {
                    let existing = &mut cart.items[index];
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines, not units.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items
            .iter()
            .find(|item| &item.product_id == product_id)
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| &item.product_id == product_id)
    }

    /// Adds one unit of the product. If a line for it already exists only its
    /// quantity is bumped; the stored name, price and image stay as they were
    /// when the line was first added.
    pub fn add(&mut self, props: NewLineItemProps) {
        match self.position(&props.product_id) {
            Some(index) => {
                let existing = &mut self.items[index];
                existing.quantity = existing.quantity.saturating_add(1);
            }
            None => self.items.push(LineItem::new(props)),
        }
    }

    /// Removes the line for the product. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        match self.position(product_id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sets the quantity of an existing line, clamped to a minimum of one.
    /// Returns whether the product was in the cart; unknown products leave
    /// the cart untouched.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        match self.position(product_id) {
            Some(index) => {
                self.items[index].quantity =
                    u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
                true
            }
            None => false,
        }
    }

    /// Drops every line. Returns whether the cart held anything.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        true
    }

    /// Sum of `unit_price * quantity` over all lines, in minor units.
    pub fn total_amount(&self) -> u64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total units across all lines.
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// What an operation on the cart store hands back: the resulting cart
/// snapshot plus whether this operation's slot write went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartUpdate {
    pub cart: Cart,
    pub persistence: PersistenceStatus,
}

/// Outcome of the write-through performed by a single operation. Operations
/// that had nothing to write report `Synced`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceStatus {
    Synced,
    Failed(StorageError),
}

impl PersistenceStatus {
    pub fn is_synced(&self) -> bool {
        matches!(self, PersistenceStatus::Synced)
    }
}
