pub mod calculations;
pub mod display;
pub mod models;

pub use calculations::{PricingConfig, PricingConfigError, PricingEngine, PricingValidation};
pub use display::{DisplayConfig, DisplaySink, InputSource, PricingBinding};
pub use models::*;
