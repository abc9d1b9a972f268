//=========================================================================
// State Registry: Library Root
//
// A finite-state container for a game loop: states are registered under
// unique ids, exactly one of them is active, and the host loop forwards
// its per-frame update/draw calls through the registry.
//
// Responsibilities:
// - Expose the `State` trait that game states implement
// - Expose the `StateRegistry` that owns states and switches between them
// - Stay out of rendering, input and timing; the host loop owns those
//
// Typical usage:
// ```ignore
// let mut states = StateRegistry::new();
// states.register(MenuState::new())?;
// states.register(GameState::new())?;
// states.activate("menu")?;
//
// loop {
//     states.update()?;
//     states.draw(&mut screen)?;
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the state system. Most code only needs the `prelude`.
//
pub mod core;
pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use crate::core::state::{State, StateRegistry};
