//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use state_registry::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

pub use crate::core::state::{
    HookErrorPolicy, RegistryError, State, StateError, StateRegistry, StateRegistryBuilder,
};
