//! UI Components
//!
//! Reusable Leptos components.

mod clear_confirm_button;
mod generate_pdf_button;
mod grocery_form;
mod grocery_list;
mod header;
mod notice_toast;

pub use clear_confirm_button::ClearConfirmButton;
pub use generate_pdf_button::GeneratePdfButton;
pub use grocery_form::GroceryForm;
pub use grocery_list::GroceryList;
pub use header::Header;
pub use notice_toast::NoticeToast;
