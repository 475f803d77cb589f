use serde::{Deserialize, Serialize};

use business::domain::cart::model::LineItem;
use business::domain::shared::value_objects::ProductId;

/// Wire shape of one cart line in the storage slot. Field names follow the
/// storefront payloads: `unitPrice` is accepted as a legacy alias for
/// `price`, `image` is omitted when absent, and unknown fields from older
/// payloads are ignored on read.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineItemRecord {
    #[serde(rename = "id")]
    pub product_id: String,
    pub name: String,
    #[serde(rename = "price", alias = "unitPrice")]
    pub unit_price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub quantity: u32,
}

impl LineItemRecord {
    pub fn from_domain(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id.as_str().to_string(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            image: item.image.clone(),
            quantity: item.quantity,
        }
    }

    pub fn into_domain(self) -> LineItem {
        LineItem::from_storage(
            ProductId::new(self.product_id),
            self.name,
            self.unit_price,
            self.image,
            self.quantity,
        )
    }
}
