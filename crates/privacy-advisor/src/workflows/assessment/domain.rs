use serde::{Deserialize, Serialize};

/// Urgency bucket attached to every recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    /// Sort rank, lowest first.
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PasswordSecurity,
    AccountSecurity,
    NetworkSecurity,
    DeviceSecurity,
    PrivacySettings,
    SocialMediaPrivacy,
    DataProtection,
    CommunicationSecurity,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PasswordSecurity => "Password Security",
            Self::AccountSecurity => "Account Security",
            Self::NetworkSecurity => "Network Security",
            Self::DeviceSecurity => "Device Security",
            Self::PrivacySettings => "Privacy Settings",
            Self::SocialMediaPrivacy => "Social Media Privacy",
            Self::DataProtection => "Data Protection",
            Self::CommunicationSecurity => "Communication Security",
        }
    }
}

/// Qualitative bucket derived from the uncapped risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Lower bounds are inclusive and checked from the top.
    pub const fn from_score(total_risk_score: u32) -> Self {
        if total_risk_score >= 50 {
            Self::Critical
        } else if total_risk_score >= 30 {
            Self::High
        } else if total_risk_score >= 15 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    pub const fn color_hex(self) -> &'static str {
        match self {
            Self::Critical => "#dc2626",
            Self::High => "#ea580c",
            Self::Medium => "#ca8a04",
            Self::Low => "#16a34a",
        }
    }
}

/// Stable identifier for each row of the rule catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    PasswordReuse,
    NoPasswordManager,
    NoTwoFactor,
    PublicWifiWithoutVpn,
    NoVpn,
    NoOsUpdates,
    ExcessAppPermissions,
    HeavySocialMedia,
    NoBackups,
    NoEmailEncryption,
}

/// One actionable finding produced by a fired rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub rule: RuleId,
    pub priority: Priority,
    pub category: Category,
    pub message: &'static str,
    pub details: &'static str,
    pub action: &'static str,
    pub risk_score: u32,
}
