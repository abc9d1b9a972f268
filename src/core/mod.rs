//=========================================================================
// Core
//=========================================================================
//
// Engine-side systems exposed to the host game loop.
//
// Currently holds only the state system:
//   state: State trait + StateRegistry (registration, activation,
//          update/draw dispatch)
//
//=========================================================================

pub mod state;
