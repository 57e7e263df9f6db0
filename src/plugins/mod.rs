pub mod assets;
pub mod classes;
pub mod contacts;
pub mod form;
pub mod health;
pub mod metrics;
pub mod registrations;
