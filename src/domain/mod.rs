// Domain layer - row types, panel outcomes and session state
pub mod dashboard;
pub mod panel;
pub mod session;
pub mod trade;
