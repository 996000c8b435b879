//! Model-View-Intent primitives shared by the UI features.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! States are immutable and self-contained; intents are user or system
//! actions; reducers are the only place state transitions happen.

/// Marker trait for UI state objects.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intent objects.
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents.
///
/// This must be a pure function: (State, Intent) -> State, no side effects.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
