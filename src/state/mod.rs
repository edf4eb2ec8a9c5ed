/// State management module
///
/// This module handles all application state, including:
/// - The immutable store and its merge-based update protocol (store.rs)
/// - Shared data structures (data.rs)

pub mod data;
pub mod store;
