//! Risk categories and their display palette.

/// Coarse risk bucket attached to an observation by the upstream feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RiskCategory {
    High,
    Moderate,
    Low,
    #[default]
    Minimal,
}

impl RiskCategory {
    /// Parse a category label case-insensitively; anything unknown is `Minimal`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => RiskCategory::High,
            "moderate" => RiskCategory::Moderate,
            "low" => RiskCategory::Low,
            _ => RiskCategory::Minimal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskCategory::High => "high",
            RiskCategory::Moderate => "moderate",
            RiskCategory::Low => "low",
            RiskCategory::Minimal => "minimal",
        }
    }

    /// Hex colour used for orbit lines and markers.
    pub fn hex(self) -> &'static str {
        match self {
            RiskCategory::High => "#ef4444",
            RiskCategory::Moderate => "#f59e0b",
            RiskCategory::Low => "#eab308",
            RiskCategory::Minimal => "#22c55e",
        }
    }

    /// Same colour as [`Self::hex`], as an RGB triple.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            RiskCategory::High => (0xef, 0x44, 0x44),
            RiskCategory::Moderate => (0xf5, 0x9e, 0x0b),
            RiskCategory::Low => (0xea, 0xb3, 0x08),
            RiskCategory::Minimal => (0x22, 0xc5, 0x5e),
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
