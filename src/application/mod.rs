// Application layer - use cases over the trade repository
pub mod dashboard_service;
pub mod refresh_driver;
pub mod trade_repository;

#[cfg(test)]
pub(crate) mod testing;
