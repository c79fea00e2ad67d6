mod garment_type;
mod order;
mod price_table;

pub use garment_type::GarmentType;
pub use order::{OrderPricing, OrderRecord};
pub use price_table::{PriceTable, PriceTableError};
