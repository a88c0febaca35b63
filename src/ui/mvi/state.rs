//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned to create new states, carry everything the view
/// needs to render, and compare with `PartialEq` to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
