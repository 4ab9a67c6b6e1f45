//! Imagen scene illustrations.

mod client;
mod config;
mod dto;

pub use client::ImagenClient;
pub use config::{ImageConfig, PersonGeneration, SafetyFilterLevel};
