//! Resplan - Reseplanerare
//!
//! Persistens- och mediakärnan: resor, resplaner, boenden, transporter,
//! måltider, dokument, visum, medresenärer och fotoalbum lagrade som
//! oberoende collections i ett platt nyckel-värde-lager.

#![allow(dead_code)]

pub mod models;
pub mod db;
pub mod services;
pub mod store;
pub mod utils;

// Re-exports
pub use db::Database;
pub use models::*;
