//=========================================================================
// State Registry Builder
//
// Fluent configuration for a [`StateRegistry`].
//
// ```text
//     StateRegistryBuilder  ──build()──>  StateRegistry
//         │
//         ├─ with_hook_policy()
//         └─ with_capacity()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use super::{HookErrorPolicy, StateRegistry};

//=== StateRegistryBuilder ================================================

/// Builder for configuring and constructing a [`StateRegistry`].
///
/// # Default Values
///
/// - **Hook policy**: [`HookErrorPolicy::Propagate`]
/// - **Capacity**: 0 (grows on demand)
///
/// # Examples
///
/// ```rust
/// use state_registry::prelude::*;
///
/// struct Canvas;
///
/// let registry: StateRegistry<Canvas> = StateRegistryBuilder::new()
///     .with_hook_policy(HookErrorPolicy::Discard)
///     .with_capacity(4)
///     .build();
///
/// assert_eq!(registry.hook_policy(), HookErrorPolicy::Discard);
/// assert!(registry.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateRegistryBuilder {
    hook_policy: HookErrorPolicy,
    capacity: usize,
}

impl StateRegistryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            hook_policy: HookErrorPolicy::Propagate,
            capacity: 0,
        }
    }

    /// Sets how `activate` treats `on_exit` / `on_enter` failures.
    ///
    /// Default: [`HookErrorPolicy::Propagate`]
    pub fn with_hook_policy(mut self, policy: HookErrorPolicy) -> Self {
        self.hook_policy = policy;
        self
    }

    /// Pre-allocates room for `capacity` states.
    ///
    /// Default: 0
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds the registry. It starts with no states and nothing active.
    pub fn build<Surface: ?Sized>(self) -> StateRegistry<Surface> {
        info!(
            "Building state registry (hook policy: {:?}, capacity: {})",
            self.hook_policy, self.capacity
        );

        StateRegistry::with_config(self.hook_policy, self.capacity)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
