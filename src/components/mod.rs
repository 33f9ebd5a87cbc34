//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod filter_select;
mod generation_preview;
mod layout;
mod pagination;
mod question_table;
mod require_auth;

pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_select::FilterSelect;
pub use generation_preview::GenerationPreview;
pub use layout::AdminLayout;
pub use pagination::TablePagination;
pub use question_table::QuestionTable;
pub use require_auth::RequireAuth;
