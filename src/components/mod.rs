//! Leptos view components. Behavior lives in `crate::state`; components wire
//! it to DOM events.

pub mod cart_summary;
pub mod info_tabs;
pub mod product;
pub mod product_details;
pub mod review_form;
pub mod review_list;
