pub mod config;
pub mod connectivity;
pub mod error;
pub mod feature_flags;
pub mod menu;
pub mod models;
pub mod panel;
pub mod requests;

pub use config::*;
pub use connectivity::*;
pub use error::*;
pub use feature_flags::*;
pub use menu::*;
pub use models::*;
pub use panel::*;
pub use requests::*;
