pub mod config;
pub mod naming;
pub mod types;

pub use config::StoreConfig;
pub use naming::qualified_headless_service_name;
pub use types::*;
