// src/extract/mod.rs
// =============================================================================
// Link extraction: turning a page body into the link paths it points at.
//
// This is a pure function over text; it never touches the network or any
// shared state, so it is safe to call from any fetch task.
// =============================================================================

mod links;

pub use links::extract_links;
