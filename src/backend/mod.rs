//! Farm data backend
//!
//! OTP login, disease detection, weather and news lookups. Only the mock
//! implementation exists until a real backend is available.

pub mod mock;

pub use mock::{MockBackend, ACCEPTED_OTP};

use crate::image::ImageInput;
use crate::models::{DiseaseReport, NewsItem, OtpDispatch, OtpVerification, WeatherSnapshot};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait FarmBackend: Send + Sync {
    async fn send_otp(&self, phone: &str) -> Result<OtpDispatch>;
    async fn verify_otp(&self, phone: &str, otp: &str) -> Result<OtpVerification>;
    async fn detect_disease(&self, image: &ImageInput) -> Result<DiseaseReport>;
    async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot>;
    async fn get_news(&self) -> Result<Vec<NewsItem>>;
}
