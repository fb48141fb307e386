pub mod config;
pub mod controller;
pub mod credentials;
pub mod dashboard;
pub mod shell;
pub mod storage;
pub mod uid;

pub use controller::SessionController;
pub use credentials::CredentialsStore;
pub use dashboard::VisibilityController;
pub use shell::DashboardShell;
pub use storage::{KeyValueStore, MemoryStore};

#[cfg(feature = "web")]
pub use storage::LocalStore;
