// Alert configuration domain model (display-only, never persisted)
use super::pollutant::{Pollutant, PollutantReading};
use serde::Serialize;

pub const DEFAULT_SMS_TEMPLATE: &str = "Air quality alert: AQI has reached {aqi} ({status}) in {location}. Consider limiting outdoor activities.";

/// Placeholders understood by the message templates
pub const TEMPLATE_VARIABLES: [&str; 5] = ["aqi", "status", "location", "time", "pollutant"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationChannel {
    #[serde(rename = "SMS")]
    Sms,
    Email,
    Push,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertFrequency {
    #[default]
    Immediate,
    Hourly,
    Daily,
    Weekly,
}

/// Quiet window in whole hours; wraps past midnight when `from > to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuietHours {
    pub from: u8,
    pub to: u8,
}

impl QuietHours {
    pub fn contains(&self, hour: u8) -> bool {
        if self.from <= self.to {
            hour >= self.from && hour < self.to
        } else {
            hour >= self.from || hour < self.to
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutantThreshold {
    pub pollutant: Pollutant,
    pub threshold: f64,
    pub unit: String,
    pub enabled: bool,
}

impl PollutantThreshold {
    fn new(pollutant: Pollutant, threshold: f64, unit: &str, enabled: bool) -> Self {
        Self {
            pollutant,
            threshold,
            unit: unit.to_string(),
            enabled,
        }
    }

    /// An enabled threshold fires when the matching reading is strictly above it.
    pub fn is_exceeded_by(&self, reading: &PollutantReading) -> bool {
        self.enabled && reading.pollutant == self.pollutant && reading.value > self.threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChannelToggles {
    pub sms: bool,
    pub email: bool,
    pub push: bool,
}

impl ChannelToggles {
    pub fn is_enabled(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::Sms => self.sms,
            NotificationChannel::Email => self.email,
            NotificationChannel::Push => self.push,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertSettings {
    pub channels: ChannelToggles,
    pub phone_number: String,
    pub email: String,
    pub frequency: AlertFrequency,
    pub quiet_hours: QuietHours,
    pub location: String,
    pub thresholds: Vec<PollutantThreshold>,
    pub sms_template: String,
    pub email_template: String,
}

impl AlertSettings {
    pub fn with_location(location: impl Into<String>) -> Self {
        Self {
            channels: ChannelToggles {
                sms: false,
                email: true,
                push: true,
            },
            phone_number: String::new(),
            email: String::new(),
            frequency: AlertFrequency::Immediate,
            quiet_hours: QuietHours { from: 22, to: 7 },
            location: location.into(),
            thresholds: vec![
                PollutantThreshold::new(Pollutant::Pm25, 25.0, "μg/m³", true),
                PollutantThreshold::new(Pollutant::Pm10, 50.0, "μg/m³", true),
                PollutantThreshold::new(Pollutant::No2, 40.0, "ppb", false),
                PollutantThreshold::new(Pollutant::O3, 70.0, "ppb", true),
                PollutantThreshold::new(Pollutant::So2, 20.0, "ppb", false),
                PollutantThreshold::new(Pollutant::Co, 9.0, "ppm", false),
            ],
            sms_template: DEFAULT_SMS_TEMPLATE.to_string(),
            email_template: String::new(),
        }
    }

    pub fn exceeded_thresholds<'a>(
        &'a self,
        readings: &'a [PollutantReading],
    ) -> impl Iterator<Item = &'a PollutantThreshold> + 'a {
        self.thresholds
            .iter()
            .filter(move |t| readings.iter().any(|r| t.is_exceeded_by(r)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertTemplate {
    pub name: String,
    pub body: String,
}

pub fn predefined_templates() -> Vec<AlertTemplate> {
    vec![
        AlertTemplate {
            name: "Basic Alert".to_string(),
            body: "AQI: {aqi} ({status}) in {location}".to_string(),
        },
        AlertTemplate {
            name: "Health Advisory".to_string(),
            body: "Health Alert: Consider limiting outdoor activities. AQI is {aqi} ({status}) in {location} as of {time}.".to_string(),
        },
    ]
}

/// Values substituted into a template at send time
#[derive(Debug, Clone, PartialEq)]
pub struct AlertContext {
    pub aqi: u32,
    pub status: String,
    pub location: String,
    pub time: String,
    pub pollutant: String,
}

impl AlertContext {
    fn value_of(&self, variable: &str) -> Option<String> {
        match variable {
            "aqi" => Some(self.aqi.to_string()),
            "status" => Some(self.status.clone()),
            "location" => Some(self.location.clone()),
            "time" => Some(self.time.clone()),
            "pollutant" => Some(self.pollutant.clone()),
            _ => None,
        }
    }
}

/// Replace `{variable}` placeholders; unknown placeholders are left as written.
pub fn render_template(template: &str, context: &AlertContext) -> String {
    let mut result = template.to_string();
    for variable in TEMPLATE_VARIABLES {
        if let Some(value) = context.value_of(variable) {
            let placeholder = format!("{{{}}}", variable);
            result = result.replace(&placeholder, &value);
        }
    }
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertHistoryEntry {
    pub id: u32,
    pub channel: NotificationChannel,
    pub message: String,
    pub timestamp: String,
    pub status: DeliveryStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::air_quality::SeverityBand;

    fn context() -> AlertContext {
        AlertContext {
            aqi: 85,
            status: "Moderate".to_string(),
            location: "New Delhi, India".to_string(),
            time: "14:00".to_string(),
            pollutant: "O3".to_string(),
        }
    }

    #[test]
    fn test_render_default_template() {
        let message = render_template(DEFAULT_SMS_TEMPLATE, &context());
        assert_eq!(
            message,
            "Air quality alert: AQI has reached 85 (Moderate) in New Delhi, India. Consider limiting outdoor activities."
        );
    }

    #[test]
    fn test_render_all_variables_and_keep_unknown() {
        let message = render_template("{aqi}|{status}|{location}|{time}|{pollutant}|{wind}", &context());
        assert_eq!(message, "85|Moderate|New Delhi, India|14:00|O3|{wind}");
    }

    #[test]
    fn test_default_settings() {
        let settings = AlertSettings::with_location("New Delhi, India");
        assert!(!settings.channels.is_enabled(NotificationChannel::Sms));
        assert!(settings.channels.is_enabled(NotificationChannel::Email));
        assert!(settings.channels.is_enabled(NotificationChannel::Push));
        assert_eq!(settings.thresholds.len(), 6);
        assert_eq!(settings.thresholds.iter().filter(|t| t.enabled).count(), 3);
        assert_eq!(settings.quiet_hours, QuietHours { from: 22, to: 7 });
    }

    #[test]
    fn test_quiet_hours_wrap_midnight() {
        let quiet = QuietHours { from: 22, to: 7 };
        assert!(quiet.contains(23));
        assert!(quiet.contains(0));
        assert!(quiet.contains(6));
        assert!(!quiet.contains(7));
        assert!(!quiet.contains(12));

        let daytime = QuietHours { from: 9, to: 17 };
        assert!(daytime.contains(9));
        assert!(!daytime.contains(17));
    }

    #[test]
    fn test_threshold_exceeded_only_when_enabled_and_strictly_above() {
        let settings = AlertSettings::with_location("New Delhi, India");
        let readings = vec![
            PollutantReading::new(Pollutant::Pm25, 30.0, "μg/m³", 25.0, SeverityBand::Moderate),
            PollutantReading::new(Pollutant::Pm10, 50.0, "μg/m³", 50.0, SeverityBand::Good),
            PollutantReading::new(Pollutant::No2, 90.0, "ppb", 40.0, SeverityBand::Unhealthy),
        ];

        let fired: Vec<Pollutant> = settings
            .exceeded_thresholds(&readings)
            .map(|t| t.pollutant)
            .collect();
        assert_eq!(fired, vec![Pollutant::Pm25]);
    }
}
