//! Chat panel open/close state as a pure reducer.
//!
//! The open flag used to be shared mutable UI state; modelling it as an
//! explicit state + action reducer keeps it testable and singleton-free.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Open,
    Close,
    Toggle,
}

#[must_use]
pub fn reduce(state: PanelState, action: PanelAction) -> PanelState {
    match action {
        PanelAction::Open => PanelState::Open,
        PanelAction::Close => PanelState::Closed,
        PanelAction::Toggle => match state {
            PanelState::Open => PanelState::Closed,
            PanelState::Closed => PanelState::Open,
        },
    }
}
