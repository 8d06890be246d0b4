//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and domain logic. Services here are
//! pure orchestrators - they don't know about concrete implementations.

mod address_manager;
mod readiness;
mod settings_manager;

pub use address_manager::AddressManager;
pub use readiness::ReadyHandler;
pub use settings_manager::SettingsManager;
