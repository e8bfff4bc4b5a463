//! Browser bindings for the page switcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module here implements one switcher seam against the live page:
//! the view registry (`dom`), the deferred task scheduler (`timers`) and the
//! page-entry callbacks exported by page scripts (`globals`). All of them
//! need a browser and are compiled only with the `hydrate` feature.

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod globals;
#[cfg(feature = "hydrate")]
pub mod timers;
