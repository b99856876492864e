//! KisanMitra client integration layer
//!
//! Farming-assistant services backed by Gemini: a multilingual chat
//! assistant, vision-based cotton disease diagnosis, and a mock farm backend
//! for OTP login, weather and news.

pub mod ai;
pub mod app;
pub mod assistant;
pub mod backend;
pub mod diagnosis;
pub mod error;
pub mod image;
pub mod models;
pub mod prompts;

pub use error::{Error, Result};
