/// Qualitative banding of a CO2 total, used by summary views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactBand {
    /// Under 1 kg
    Minimal,
    /// 1 to 5 kg
    Low,
    /// 5 to 10 kg
    Moderate,
    /// 10 kg and above
    High,
}

impl ImpactBand {
    /// Classify a total in kg CO2
    pub fn for_kg(kg: f64) -> Self {
        if kg < 1.0 {
            ImpactBand::Minimal
        } else if kg < 5.0 {
            ImpactBand::Low
        } else if kg < 10.0 {
            ImpactBand::Moderate
        } else {
            ImpactBand::High
        }
    }

    /// Short assessment for display
    pub fn message(&self) -> &'static str {
        match self {
            ImpactBand::Minimal => "Excellent! Very low impact",
            ImpactBand::Low => "Good! Below average impact",
            ImpactBand::Moderate => "Moderate impact",
            ImpactBand::High => "High impact - consider alternatives",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ImpactBand::for_kg(0.0), ImpactBand::Minimal);
        assert_eq!(ImpactBand::for_kg(0.99), ImpactBand::Minimal);
        assert_eq!(ImpactBand::for_kg(1.0), ImpactBand::Low);
        assert_eq!(ImpactBand::for_kg(4.99), ImpactBand::Low);
        assert_eq!(ImpactBand::for_kg(5.0), ImpactBand::Moderate);
        assert_eq!(ImpactBand::for_kg(9.99), ImpactBand::Moderate);
        assert_eq!(ImpactBand::for_kg(10.0), ImpactBand::High);
        assert_eq!(ImpactBand::for_kg(250.0), ImpactBand::High);
    }
}
