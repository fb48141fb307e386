// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod page_header;

// Primitive wrappers
pub mod dialog;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
