//! Sous-commandes de la CLI

pub mod assemble;
pub mod benchmark;
pub mod sample;
