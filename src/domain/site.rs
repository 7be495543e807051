// Static marketing content for the landing and about screens
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub expertise: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
}

impl Milestone {
    /// Two-digit badge shown on the timeline ("24" for 2024)
    pub fn short_year(&self) -> &str {
        let start = self.year.len().saturating_sub(2);
        self.year.get(start..).unwrap_or(&self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_year() {
        let milestone = Milestone {
            year: "2024".to_string(),
            title: "Launch".to_string(),
            description: String::new(),
        };
        assert_eq!(milestone.short_year(), "24");
    }
}
