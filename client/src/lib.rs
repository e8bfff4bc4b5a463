//! # client
//!
//! Browser side of the DeltaConverge page switcher.
//!
//! Two front-ends share the `page-switcher` core:
//!
//! - Server-rendered pages call the `switchPage` JS global (see [`entry`]),
//!   which drives the existing markup through a DOM registry, `setTimeout`
//!   timers and page-script callbacks.
//! - The Leptos shell ([`app::App`]) renders its own navigation and views
//!   from a signal-backed registry.
//!
//! Browser-only code is gated behind the `hydrate` feature.

pub mod app;
pub mod components;
#[cfg(feature = "hydrate")]
pub mod entry;
pub mod state;
pub mod util;
