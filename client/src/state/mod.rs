//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The page switcher owns no markup. In the Leptos shell its registry writes
//! into a `RwSignal<ViewState>` that components read reactively.

pub mod nav;
