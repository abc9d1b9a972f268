//=========================================================================
// State Registry
//=========================================================================
//
// Manages state registration, activation, and per-frame dispatch.
//
// States are stored in a HashMap by id; a parallel Vec keeps the ids in
// registration order. Exactly one state (or none, before the first
// activation) receives update/draw calls.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::registry_builder::StateRegistryBuilder;
use super::{HookErrorPolicy, RegistryError, State, StateError};

//=== State Registry ======================================================

/// Keeps game states by id and dispatches the frame loop to the active one.
///
/// States are registered once and referenced by id afterwards. There is no
/// deregistration: a registered state lives as long as the registry.
///
/// # Example
///
/// ```rust
/// use state_registry::prelude::*;
///
/// struct Canvas;
///
/// struct Menu { ticks: u32 }
///
/// impl State<Canvas> for Menu {
///     fn id(&self) -> &str { "menu" }
///     fn on_enter(&mut self) -> Result<(), StateError> {
///         self.ticks = 0;
///         Ok(())
///     }
///     fn update(&mut self) -> Result<(), StateError> {
///         self.ticks += 1;
///         Ok(())
///     }
///     fn draw(&mut self, _canvas: &mut Canvas) -> Result<(), StateError> { Ok(()) }
/// }
///
/// let mut registry: StateRegistry<Canvas> = StateRegistry::new();
/// registry.register(Menu { ticks: 0 })?;
/// registry.activate("menu")?;
///
/// registry.update()?;
/// registry.draw(&mut Canvas)?;
///
/// assert_eq!(registry.active_id(), Some("menu"));
/// assert_eq!(registry.list_states(), ["menu"]);
/// # Ok::<(), RegistryError>(())
/// ```
pub struct StateRegistry<Surface: ?Sized> {
    states: HashMap<String, Box<dyn State<Surface>>>,
    order: Vec<String>,
    active: Option<String>,
    hook_policy: HookErrorPolicy,
}

impl<Surface: ?Sized> StateRegistry<Surface> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty registry with default settings.
    ///
    /// Use [`StateRegistryBuilder`] to pick a different [`HookErrorPolicy`].
    pub fn new() -> Self {
        StateRegistryBuilder::new().build()
    }

    pub(super) fn with_config(hook_policy: HookErrorPolicy, capacity: usize) -> Self {
        Self {
            states: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            active: None,
            hook_policy,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a state under its [`State::id`].
    ///
    /// No lifecycle hook runs here. The state is automatically boxed.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateIdentifier`] if the id is taken. The
    /// registry is left unchanged and keeps the state registered first.
    pub fn register<T>(&mut self, state: T) -> Result<(), RegistryError>
    where
        T: State<Surface> + 'static,
    {
        match self.states.entry(state.id().to_owned()) {
            Entry::Occupied(slot) => {
                warn!("State {:?} is already registered, rejecting duplicate", slot.key());
                Err(RegistryError::DuplicateIdentifier(slot.key().clone()))
            }
            Entry::Vacant(slot) => {
                debug!("Registered state {:?}", slot.key());
                self.order.push(slot.key().clone());
                slot.insert(Box::new(state));
                Ok(())
            }
        }
    }

    //--- Activation -------------------------------------------------------

    /// Makes the state registered under `id` the active one.
    ///
    /// Runs `on_exit` on the current state (if any), switches, then runs
    /// `on_enter` on the new state. Re-activating the active id still runs
    /// both hooks on it.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnknownIdentifier`] if `id` is not registered.
    ///   No hook runs and the active state is unchanged.
    /// - [`RegistryError::ExitHook`] if `on_exit` fails under
    ///   [`HookErrorPolicy::Propagate`]. The transition is aborted.
    /// - [`RegistryError::EnterHook`] if `on_enter` fails under
    ///   [`HookErrorPolicy::Propagate`]. The new state is already active.
    ///
    /// Under [`HookErrorPolicy::Discard`] hook failures are logged and
    /// `activate` succeeds.
    pub fn activate(&mut self, id: &str) -> Result<(), RegistryError> {
        if !self.states.contains_key(id) {
            warn!("Attempted to activate unregistered state {:?}", id);
            return Err(RegistryError::UnknownIdentifier(id.to_owned()));
        }

        let policy = self.hook_policy;

        // Leave the current state
        if let Some(current) = self.active.as_deref() {
            if let Some(state) = self.states.get_mut(current) {
                debug!("Exiting state {:?}", current);
                check_hook(policy, state.on_exit(), |source| RegistryError::ExitHook {
                    id: current.to_owned(),
                    source,
                })?;
            }
        }

        debug!("Switching active state to {:?}", id);
        self.active = Some(id.to_owned());

        // Enter the new one
        if let Some(state) = self.states.get_mut(id) {
            check_hook(policy, state.on_enter(), |source| RegistryError::EnterHook {
                id: id.to_owned(),
                source,
            })?;
        }

        Ok(())
    }

    //--- Frame Dispatch ---------------------------------------------------

    /// Runs one update tick on the active state.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NoActiveState`] if nothing has been activated, or
    /// [`RegistryError::State`] carrying the state's own error.
    pub fn update(&mut self) -> Result<(), RegistryError> {
        self.active_state_mut()?
            .update()
            .map_err(RegistryError::State)
    }

    /// Draws the active state onto `surface`.
    ///
    /// The surface is handed to the state as-is.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NoActiveState`] if nothing has been activated, or
    /// [`RegistryError::State`] carrying the state's own error.
    pub fn draw(&mut self, surface: &mut Surface) -> Result<(), RegistryError> {
        self.active_state_mut()?
            .draw(surface)
            .map_err(RegistryError::State)
    }

    //--- Queries ----------------------------------------------------------

    /// Ids of all registered states, in registration order.
    pub fn list_states(&self) -> &[String] {
        &self.order
    }

    /// Id of the active state, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the state registered under `id` without touching activation.
    pub fn get(&self, id: &str) -> Option<&dyn State<Surface>> {
        self.states.get(id).map(|state| state.as_ref())
    }

    /// Mutable variant of [`StateRegistry::get`]. No hook runs.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut (dyn State<Surface> + 'static)> {
        self.states.get_mut(id).map(|state| state.as_mut())
    }

    pub fn hook_policy(&self) -> HookErrorPolicy {
        self.hook_policy
    }

    //--- Internal Helpers -------------------------------------------------

    fn active_state_mut(&mut self) -> Result<&mut (dyn State<Surface> + 'static), RegistryError> {
        let id = self.active.as_deref().ok_or(RegistryError::NoActiveState)?;

        self.states
            .get_mut(id)
            .map(|state| state.as_mut())
            .ok_or(RegistryError::NoActiveState)
    }
}

impl<Surface: ?Sized> Default for StateRegistry<Surface> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Hook Results ========================================================
//
// Applies the hook policy to the outcome of on_enter / on_exit.
//
fn check_hook<F>(
    policy: HookErrorPolicy,
    result: Result<(), StateError>,
    into_error: F,
) -> Result<(), RegistryError>
where
    F: FnOnce(StateError) -> RegistryError,
{
    let Err(source) = result else {
        return Ok(());
    };

    let error = into_error(source);
    match policy {
        HookErrorPolicy::Propagate => {
            warn!("{}", error);
            Err(error)
        }
        HookErrorPolicy::Discard => {
            warn!("Discarding hook failure: {}", error);
            Ok(())
        }
    }
}

//=== Debug Trait ==========================================================
//
// States are not required to be Debug, so only ids are printed.
//
// ```text
// StateRegistry {
//     states: ["menu", "game"],
//     active: Some("game"),
//     hook_policy: Propagate
// }
// ```
//
impl<Surface: ?Sized> fmt::Debug for StateRegistry<Surface> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRegistry")
            .field("states", &self.order)
            .field("active", &self.active)
            .field("hook_policy", &self.hook_policy)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
