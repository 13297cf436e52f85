pub mod logging;
pub mod pizza_order;
pub mod server_setup;

// Re-export pizza_order types
pub use pizza_order::{MAX_TOPPINGS, PizzaOrder, pizza_order};

// Re-export server_setup types
pub use server_setup::{ServerSettings, TlsSettings, server_setup};
