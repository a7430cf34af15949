//! Инфраструктура вокруг домена: генерация ID.

pub mod ids;

pub use ids::*;
