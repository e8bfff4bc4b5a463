//! Leptos components for the dashboard shell.

pub mod nav_bar;
pub mod page_view;
