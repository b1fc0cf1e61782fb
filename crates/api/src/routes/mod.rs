pub mod accounts;
pub mod health;
pub mod metrics;
pub mod orders;
