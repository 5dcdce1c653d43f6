pub mod cafe;
pub mod health;
