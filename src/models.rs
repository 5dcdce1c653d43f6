pub mod cafe;
