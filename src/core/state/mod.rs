//=========================================================================
// State System
//=========================================================================
//
// Keeps a set of game states and dispatches the frame loop to the single
// active one.
//
// Architecture:
//   StateRegistry
//     ├─ states: HashMap<String, Box<dyn State>>
//     ├─ order:  Vec<String>         (registration order)
//     ├─ active: Option<String>
//     └─ hook_policy: HookErrorPolicy
//
// Flow:
//   register()* → activate() → on_exit(old) → on_enter(new)
//   update() / draw() → active State
//
//=========================================================================

//=== Module Declarations =================================================

mod error;
mod registry_builder;
mod state_registry;

//=== Public API ==========================================================

pub use error::{RegistryError, StateError};
pub use registry_builder::StateRegistryBuilder;
pub use state_registry::StateRegistry;

//=== Hook Error Policy ===================================================

/// Decides what [`StateRegistry::activate`] does when a lifecycle hook fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookErrorPolicy {
    /// Hook failures are returned from `activate`.
    ///
    /// A failing `on_exit` aborts the transition. A failing `on_enter` is
    /// reported after the switch has happened.
    #[default]
    Propagate,

    /// Hook failures are logged and dropped; the transition always completes.
    Discard,
}

//=== State Trait =========================================================

/// A unit of per-frame game behavior, registered under a unique id.
///
/// `Surface` is whatever the host renders onto. The registry passes it
/// through to [`State::draw`] untouched.
///
/// # Minimal Implementation
///
/// Only `id()`, `update()` and `draw()` are required. Lifecycle hooks default
/// to doing nothing:
///
/// ```rust
/// # use state_registry::prelude::*;
/// struct Canvas;
///
/// struct MenuState;
///
/// impl State<Canvas> for MenuState {
///     fn id(&self) -> &str {
///         "main_menu"
///     }
///
///     fn update(&mut self) -> Result<(), StateError> {
///         Ok(())
///     }
///
///     fn draw(&mut self, _canvas: &mut Canvas) -> Result<(), StateError> {
///         Ok(())
///     }
/// }
/// ```
pub trait State<Surface: ?Sized> {
    /// Unique, stable identifier of this state.
    ///
    /// Read once at registration; it must not change afterwards.
    fn id(&self) -> &str;

    /// Called when this state becomes active.
    ///
    /// Default implementation does nothing. Override to reset or load state.
    fn on_enter(&mut self) -> Result<(), StateError> {
        Ok(())
    }

    /// Called when this state stops being active.
    ///
    /// Default implementation does nothing. Override for teardown.
    fn on_exit(&mut self) -> Result<(), StateError> {
        Ok(())
    }

    /// Called once per frame while active.
    fn update(&mut self) -> Result<(), StateError>;

    /// Called once per frame while active, with the host's surface.
    fn draw(&mut self, surface: &mut Surface) -> Result<(), StateError>;
}
