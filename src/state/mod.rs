//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`product`, `cart`, `reviews`, etc.) so individual
//! components can depend on small focused models. Components hold these in
//! `RwSignal`s; the types themselves are plain data with no Leptos dependency.

pub mod cart;
pub mod product;
pub mod review;
pub mod review_form;
pub mod reviews;
pub mod ui;
