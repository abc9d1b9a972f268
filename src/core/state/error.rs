//=========================================================================
// Registry Errors
//=========================================================================
//
// Error taxonomy for the state registry.
//
// Registry-owned failures (duplicate id, unknown id, nothing active) carry
// the offending id where one exists. Failures reported by a State itself
// are wrapped without modification so callers can inspect or downcast the
// original error.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::error::Error;
use std::fmt;

//=== StateError ==========================================================

/// Error type returned by [`State`](super::State) implementations.
///
/// Any error type can be boxed into this, including plain strings via
/// `"message".into()`.
pub type StateError = Box<dyn Error + Send + Sync + 'static>;

//=== RegistryError =======================================================

/// Errors reported by [`StateRegistry`](super::StateRegistry) operations.
#[derive(Debug)]
pub enum RegistryError {
    /// A state with this id is already registered.
    DuplicateIdentifier(String),

    /// No state is registered under this id.
    UnknownIdentifier(String),

    /// `update` or `draw` was called before any successful activation.
    NoActiveState,

    /// The active state's `update` or `draw` failed.
    ///
    /// The inner error is exactly what the state returned.
    State(StateError),

    /// The outgoing state's `on_exit` hook failed during activation.
    ///
    /// Only produced under [`HookErrorPolicy::Propagate`](super::HookErrorPolicy).
    /// The transition was aborted and the outgoing state is still active.
    ExitHook { id: String, source: StateError },

    /// The incoming state's `on_enter` hook failed during activation.
    ///
    /// Only produced under [`HookErrorPolicy::Propagate`](super::HookErrorPolicy).
    /// The incoming state is already active when this is returned.
    EnterHook { id: String, source: StateError },
}

//--- Trait Implementations -----------------------------------------------

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateIdentifier(id) => {
                write!(f, "State with id {:?} already exists", id)
            }
            Self::UnknownIdentifier(id) => {
                write!(f, "State {:?} does not exist in registry", id)
            }
            Self::NoActiveState => write!(f, "No active state set"),
            Self::State(e) => write!(f, "State error: {}", e),
            Self::ExitHook { id, source } => {
                write!(f, "on_exit failed for state {:?}: {}", id, source)
            }
            Self::EnterHook { id, source } => {
                write!(f, "on_enter failed for state {:?}: {}", id, source)
            }
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::State(e) => Some(e.as_ref()),
            Self::ExitHook { source, .. } | Self::EnterHook { source, .. } => {
                Some(source.as_ref())
            }
            _ => None,
        }
    }
}

impl From<StateError> for RegistryError {
    fn from(e: StateError) -> Self {
        Self::State(e)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_error_implements_error() {
        fn assert_error<T: Error>() {}
        assert_error::<RegistryError>();
    }

    #[test]
    fn display_names_the_identifier() {
        let dup = RegistryError::DuplicateIdentifier("menu".to_string());
        assert_eq!(dup.to_string(), "State with id \"menu\" already exists");

        let unknown = RegistryError::UnknownIdentifier("pause".to_string());
        assert_eq!(unknown.to_string(), "State \"pause\" does not exist in registry");

        assert_eq!(RegistryError::NoActiveState.to_string(), "No active state set");
    }

    #[test]
    fn delegated_error_is_kept_as_source() {
        let err = RegistryError::from(StateError::from("out of lives"));

        assert_eq!(err.to_string(), "State error: out of lives");
        let source = err.source().expect("delegated error must expose a source");
        assert_eq!(source.to_string(), "out of lives");
    }

    #[test]
    fn hook_errors_expose_source() {
        let err = RegistryError::EnterHook {
            id: "game".to_string(),
            source: "missing level".into(),
        };

        assert_eq!(err.to_string(), "on_enter failed for state \"game\": missing level");
        assert_eq!(err.source().map(|s| s.to_string()), Some("missing level".to_string()));
    }

    #[test]
    fn registry_owned_errors_have_no_source() {
        assert!(RegistryError::NoActiveState.source().is_none());
        assert!(RegistryError::UnknownIdentifier("x".into()).source().is_none());
    }
}
