// Air quality severity bands and the canonical classifier
use serde::Serialize;
use std::fmt;

/// Severity band on the US AQI scale, ordered from cleanest to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// Color family used when a band is rendered as a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Maroon,
    Neutral,
}

/// Color family of a percentage-of-limit progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitTone {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub band: SeverityBand,
    pub color: &'static str,
}

impl SeverityBand {
    pub const ALL: [SeverityBand; 6] = [
        SeverityBand::Good,
        SeverityBand::Moderate,
        SeverityBand::UnhealthyForSensitiveGroups,
        SeverityBand::Unhealthy,
        SeverityBand::VeryUnhealthy,
        SeverityBand::Hazardous,
    ];

    /// Inclusive upper bound of the band, `None` for the open-ended top band.
    pub fn upper_bound(self) -> Option<f64> {
        match self {
            SeverityBand::Good => Some(50.0),
            SeverityBand::Moderate => Some(100.0),
            SeverityBand::UnhealthyForSensitiveGroups => Some(150.0),
            SeverityBand::Unhealthy => Some(200.0),
            SeverityBand::VeryUnhealthy => Some(300.0),
            SeverityBand::Hazardous => None,
        }
    }

    /// Band for a numeric AQI. Negative and NaN input is clamped to 0.
    pub fn from_aqi(value: f64) -> Self {
        let value = if value.is_nan() { 0.0 } else { value.max(0.0) };
        Self::ALL
            .into_iter()
            .find(|band| band.upper_bound().is_none_or(|upper| value <= upper))
            .unwrap_or(SeverityBand::Hazardous)
    }

    /// Case-insensitive lookup by display label ("good", "Unhealthy for Sensitive Groups", ...).
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|band| band.label().eq_ignore_ascii_case(label))
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityBand::Good => "Good",
            SeverityBand::Moderate => "Moderate",
            SeverityBand::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            SeverityBand::Unhealthy => "Unhealthy",
            SeverityBand::VeryUnhealthy => "Very Unhealthy",
            SeverityBand::Hazardous => "Hazardous",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SeverityBand::Good => "#00e400",
            SeverityBand::Moderate => "#ffff00",
            SeverityBand::UnhealthyForSensitiveGroups => "#ff7e00",
            SeverityBand::Unhealthy => "#ff0000",
            SeverityBand::VeryUnhealthy => "#8f3f97",
            SeverityBand::Hazardous => "#7e0023",
        }
    }

    pub fn badge_tone(self) -> BadgeTone {
        match self {
            SeverityBand::Good => BadgeTone::Green,
            SeverityBand::Moderate => BadgeTone::Yellow,
            SeverityBand::UnhealthyForSensitiveGroups => BadgeTone::Orange,
            SeverityBand::Unhealthy => BadgeTone::Red,
            SeverityBand::VeryUnhealthy => BadgeTone::Purple,
            SeverityBand::Hazardous => BadgeTone::Maroon,
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a numeric AQI into its band and display color.
pub fn classify(value: f64) -> Classification {
    let band = SeverityBand::from_aqi(value);
    Classification {
        band,
        color: band.color(),
    }
}

/// Badge tone for a free-form status label; unknown labels render neutral.
pub fn badge_tone_for_label(label: &str) -> BadgeTone {
    SeverityBand::from_label(label)
        .map(SeverityBand::badge_tone)
        .unwrap_or(BadgeTone::Neutral)
}

/// Raw percentage of a health limit. Not clamped; may exceed 100.
pub fn percent_of_limit(value: f64, limit: f64) -> f64 {
    value / limit * 100.0
}

/// Width of a filled progress bar, clamped to [0, 100].
pub fn bar_width(percentage: f64) -> f64 {
    percentage.clamp(0.0, 100.0)
}

pub fn limit_tone(percentage: f64) -> LimitTone {
    if percentage < 50.0 {
        LimitTone::Green
    } else if percentage < 75.0 {
        LimitTone::Yellow
    } else {
        LimitTone::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_good_band_covers_zero_to_fifty() {
        for value in [0.0, 1.0, 25.5, 49.9, 50.0] {
            let result = classify(value);
            assert_eq!(result.band, SeverityBand::Good);
            assert_eq!(result.color, "#00e400");
        }
    }

    #[test]
    fn test_moderate_band() {
        for value in [50.5, 51.0, 75.0, 100.0] {
            assert_eq!(classify(value).band, SeverityBand::Moderate);
        }
        assert_eq!(classify(75.0).color, "#ffff00");
    }

    #[test]
    fn test_boundaries_belong_to_lower_band() {
        assert_eq!(classify(50.0).band, SeverityBand::Good);
        assert_eq!(classify(51.0).band, SeverityBand::Moderate);
        assert_eq!(classify(100.0).band, SeverityBand::Moderate);
        assert_eq!(classify(101.0).band, SeverityBand::UnhealthyForSensitiveGroups);
        assert_eq!(classify(150.0).band, SeverityBand::UnhealthyForSensitiveGroups);
        assert_eq!(classify(151.0).band, SeverityBand::Unhealthy);
        assert_eq!(classify(200.0).band, SeverityBand::Unhealthy);
        assert_eq!(classify(201.0).band, SeverityBand::VeryUnhealthy);
        assert_eq!(classify(300.0).band, SeverityBand::VeryUnhealthy);
        assert_eq!(classify(301.0).band, SeverityBand::Hazardous);
        assert_eq!(classify(999.0).color, "#7e0023");
    }

    #[test]
    fn test_negative_and_nan_clamp_to_good() {
        assert_eq!(classify(-12.0).band, SeverityBand::Good);
        assert_eq!(classify(f64::NAN).band, SeverityBand::Good);
    }

    #[test]
    fn test_label_lookup_is_case_insensitive() {
        assert_eq!(SeverityBand::from_label("good"), Some(SeverityBand::Good));
        assert_eq!(SeverityBand::from_label("MODERATE"), Some(SeverityBand::Moderate));
        assert_eq!(
            SeverityBand::from_label("unhealthy for sensitive groups"),
            Some(SeverityBand::UnhealthyForSensitiveGroups)
        );
        assert_eq!(SeverityBand::from_label(" Unhealthy "), Some(SeverityBand::Unhealthy));
        assert_eq!(SeverityBand::from_label("smoky"), None);

        for band in SeverityBand::ALL {
            assert_eq!(SeverityBand::from_label(band.label()), Some(band));
        }
    }

    #[test]
    fn test_badge_tone_follows_band() {
        assert_eq!(badge_tone_for_label("Good"), BadgeTone::Green);
        assert_eq!(badge_tone_for_label("moderate"), BadgeTone::Yellow);
        assert_eq!(badge_tone_for_label("Unhealthy for Sensitive Groups"), BadgeTone::Orange);
        assert_eq!(badge_tone_for_label("unhealthy"), BadgeTone::Red);
        assert_eq!(badge_tone_for_label("unknown"), BadgeTone::Neutral);

        // numeric and label lookups agree
        for value in [10.0, 80.0, 120.0, 180.0, 250.0, 400.0] {
            let band = classify(value).band;
            assert_eq!(badge_tone_for_label(band.label()), band.badge_tone());
        }
    }

    #[test]
    fn test_percent_of_limit() {
        assert_eq!(percent_of_limit(12.0, 25.0), 48.0);
        assert!((percent_of_limit(45.0, 70.0) - 64.2857).abs() < 1e-4);
        assert_eq!(percent_of_limit(150.0, 100.0), 150.0);
    }

    #[test]
    fn test_bar_width_clamps() {
        assert_eq!(bar_width(150.0), 100.0);
        assert_eq!(bar_width(37.5), 37.5);
    }

    #[test]
    fn test_limit_tone() {
        assert_eq!(limit_tone(48.0), LimitTone::Green);
        assert_eq!(limit_tone(50.0), LimitTone::Yellow);
        assert_eq!(limit_tone(74.9), LimitTone::Yellow);
        assert_eq!(limit_tone(75.0), LimitTone::Red);
    }
}
