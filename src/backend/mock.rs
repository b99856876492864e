use super::FarmBackend;
use crate::image::ImageInput;
use crate::models::{
    DiseaseReport, ForecastDay, Localized, LocalizedText, NewsCategory, NewsItem, OtpDispatch,
    OtpVerification, Severity, WeatherSnapshot,
};
use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

/// The only code `verify_otp` accepts.
pub const ACCEPTED_OTP: &str = "1234";

/// Fixed-response stand-in for the farm backend.
#[derive(Clone)]
pub struct MockBackend {
    call_count: Arc<Mutex<usize>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    fn record_call(&self) {
        *self.call_count.lock().unwrap() += 1;
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FarmBackend for MockBackend {
    async fn send_otp(&self, phone: &str) -> Result<OtpDispatch> {
        self.record_call();
        tracing::debug!("Mock OTP sent to {}", phone);

        Ok(OtpDispatch {
            success: true,
            message: "OTP sent successfully".to_string(),
            otp: ACCEPTED_OTP.to_string(),
        })
    }

    async fn verify_otp(&self, phone: &str, otp: &str) -> Result<OtpVerification> {
        self.record_call();

        if otp == ACCEPTED_OTP {
            tracing::debug!("Mock OTP verified for {}", phone);
            return Ok(OtpVerification {
                success: true,
                message: "OTP verified successfully".to_string(),
                token: Some(format!("mock_token_{}", Utc::now().timestamp_millis())),
            });
        }

        tracing::debug!("Mock OTP rejected for {}", phone);
        Ok(OtpVerification {
            success: false,
            message: "Invalid OTP".to_string(),
            token: None,
        })
    }

    async fn detect_disease(&self, image: &ImageInput) -> Result<DiseaseReport> {
        self.record_call();
        tracing::debug!("Mock disease detection on {} bytes", image.bytes().len());
        Ok(healthy_crop_report())
    }

    async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot> {
        self.record_call();
        tracing::debug!("Mock weather for ({}, {})", lat, lon);

        Ok(WeatherSnapshot {
            temp: 32,
            condition: "Sunny".to_string(),
            forecast: vec![ForecastDay {
                day: "Mon".to_string(),
                temp: 32,
            }],
        })
    }

    async fn get_news(&self) -> Result<Vec<NewsItem>> {
        self.record_call();
        Ok(news_fixtures())
    }
}

fn healthy_crop_report() -> DiseaseReport {
    DiseaseReport {
        id: "disease_1".to_string(),
        name: LocalizedText::text("Healthy Crop", "स्वस्थ फसल", "ఆరోగ్యకరమైన పంట"),
        severity: Severity::None,
        confidence: 99,
        description: LocalizedText::text(
            "Your crop appears healthy based on the visual analysis.",
            "दृश्य विश्लेषण के आधार पर आपकी फसल स्वस्थ दिखाई दे रही है।",
            "దృశ్య విశ్లేషణ ఆధారంగా మీ పంట ఆరోగ్యంగా ఉన్నట్లు కనిపిస్తోంది.",
        ),
        cure_steps: Localized::new(
            steps(&["Continue regular monitoring", "Ensure proper irrigation"]),
            steps(&["नियमित निगरानी जारी रखें", "उचित सिंचाई सुनिश्चित करें"]),
            steps(&[
                "రెగ్యులర్ పర్యవేక్షణను కొనసాగించండి",
                "సరైన నీటి పారుదలని నిర్ధారించుకోండి",
            ]),
        ),
    }
}

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn news_fixtures() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "1".to_string(),
            image_url: "https://images.unsplash.com/photo-1592982531416-04ca7277800c?q=80&w=2070&auto=format&fit=crop".to_string(),
            category: NewsCategory::Scheme,
            title: LocalizedText::text(
                "PM-Kisan Samman Nidhi Update",
                "पीएम-किसान सम्मान निधि अपडेट",
                "పిఎం-కిసాన్ సమ్మాన్ నిధి అప్‌డేట్",
            ),
            summary: LocalizedText::text(
                "The government has released the latest installment for PM-Kisan scheme beneficiaries.",
                "सरकार ने पीएम-किसान योजना के लाभार्थियों के लिए नवीनतम किस्त जारी की है।",
                "పిఎం-కిసాన్ పథకం లబ్ధిదారుల కోసం ప్రభుత్వం తాజా విడతను విడుదల చేసింది.",
            ),
            date: published_at("2024-03-20T10:00:00Z"),
        },
        NewsItem {
            id: "2".to_string(),
            image_url: "https://images.unsplash.com/photo-1495107333217-fe9d80d22aa0?q=80&w=2070&auto=format&fit=crop".to_string(),
            category: NewsCategory::News,
            title: LocalizedText::text(
                "Sustainable Farming Techniques 2024",
                "सतत खेती तकनीक 2024",
                "స్థిరమైన వ్యవసాయ పద్ధతులు 2024",
            ),
            summary: LocalizedText::text(
                "New organic farming methods are proving to increase yields by 20% in dry regions.",
                "नई जैविक खेती के तरीके शुष्क क्षेत्रों में पैदावार में 20% की वृद्धि करने के लिए सिद्ध हो रहे हैं।",
                "ఆధునిక సేంద్రీయ వ్యవసాయ పద్ధతులు పొడి ప్రాంతాలలో దిగుబడిని 20% పెంచుతున్నట్లు నిరూపిస్తున్నాయి.",
            ),
            date: published_at("2024-03-19T14:30:00Z"),
        },
        NewsItem {
            id: "3".to_string(),
            image_url: "https://images.unsplash.com/photo-1586771107445-d3ca888129ff?q=80&w=2072&auto=format&fit=crop".to_string(),
            category: NewsCategory::Price,
            title: LocalizedText::text(
                "Market Pulse: Cotton Prices Rise",
                "मार्केट पल्स: कपास की कीमतों में वृद्धि",
                "మార్కెట్ పల్స్: పత్తి ధరలు పెరిగాయి",
            ),
            summary: LocalizedText::text(
                "Cotton prices see a steady climb in major mandis across India this week.",
                "इस सप्ताह भारत भर की प्रमुख मंडियों में कपास की कीमतों में निरंतर वृद्धि देखी गई है।",
                "ఈ వారం భారతదేశవ్యాప్తంగా ప్రధాన మండీలలో పత్తి ధరలు స్థిరంగా పెరుగుతున్నాయి.",
            ),
            date: published_at("2024-03-18T09:15:00Z"),
        },
    ]
}

fn published_at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|date| date.with_timezone(&Utc))
        .unwrap_or_default()
}
