use super::super::answers::{AnswerSet, QuestionKey, YesNo};
use super::super::domain::{Category, Priority, Recommendation, RuleId};
use std::fmt;

/// A predicate over the answers paired with the recommendation it emits.
#[derive(Clone)]
pub struct Rule {
    trigger: fn(&AnswerSet) -> bool,
    template: Recommendation,
}

impl Rule {
    pub const fn new(trigger: fn(&AnswerSet) -> bool, template: Recommendation) -> Self {
        Self { trigger, template }
    }

    pub fn id(&self) -> RuleId {
        self.template.rule
    }

    pub fn points(&self) -> u32 {
        self.template.risk_score
    }

    pub fn matches(&self, answers: &AnswerSet) -> bool {
        (self.trigger)(answers)
    }

    pub fn recommendation(&self) -> Recommendation {
        self.template.clone()
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.template.rule)
            .field("points", &self.template.risk_score)
            .finish()
    }
}

fn answered(answers: &AnswerSet, key: QuestionKey, expected: YesNo) -> bool {
    answers.yes_no(key) == expected
}

fn reuses_passwords(answers: &AnswerSet) -> bool {
    answered(answers, QuestionKey::PasswordReuse, YesNo::Yes)
}

fn lacks_password_manager(answers: &AnswerSet) -> bool {
    answered(answers, QuestionKey::PasswordManager, YesNo::No)
}

fn lacks_two_factor(answers: &AnswerSet) -> bool {
    answered(answers, QuestionKey::TwoFactor, YesNo::No)
}

fn public_wifi_without_vpn(answers: &AnswerSet) -> bool {
    answered(answers, QuestionKey::PublicWifi, YesNo::Yes)
        && answered(answers, QuestionKey::Vpn, YesNo::No)
}

fn lacks_vpn(answers: &AnswerSet) -> bool {
    answered(answers, QuestionKey::Vpn, YesNo::No)
}

fn skips_os_updates(answers: &AnswerSet) -> bool {
    answered(answers, QuestionKey::OsUpdate, YesNo::No)
}

fn grants_many_permissions(answers: &AnswerSet) -> bool {
    let permissions = answers.list(QuestionKey::AppPermissions);
    permissions.len() > 2
        && !permissions
            .iter()
            .any(|permission| permission.eq_ignore_ascii_case("none"))
}

fn heavy_social_media(answers: &AnswerSet) -> bool {
    answers
        .list(QuestionKey::SocialMedia)
        .iter()
        .filter(|platform| !platform.eq_ignore_ascii_case("none"))
        .count()
        > 3
}

fn skips_backups(answers: &AnswerSet) -> bool {
    answered(answers, QuestionKey::BackupData, YesNo::No)
}

fn lacks_email_encryption(answers: &AnswerSet) -> bool {
    answered(answers, QuestionKey::EmailEncryption, YesNo::No)
}

/// Evaluation order of the standard catalog.
pub static STANDARD_RULES: [Rule; 10] = [
    Rule::new(
        reuses_passwords,
        Recommendation {
            rule: RuleId::PasswordReuse,
            priority: Priority::High,
            category: Category::PasswordSecurity,
            message: "Stop reusing passwords across accounts",
            details: "Use unique passwords for each account. Reused passwords put all your accounts at risk if one is compromised.",
            action: "Create unique passwords for each service immediately",
            risk_score: 20,
        },
    ),
    Rule::new(
        lacks_password_manager,
        Recommendation {
            rule: RuleId::NoPasswordManager,
            priority: Priority::High,
            category: Category::PasswordSecurity,
            message: "Use a password manager",
            details: "Password managers like Bitwarden, 1Password, or LastPass help you create and store strong, unique passwords.",
            action: "Install and set up a reputable password manager",
            risk_score: 15,
        },
    ),
    Rule::new(
        lacks_two_factor,
        Recommendation {
            rule: RuleId::NoTwoFactor,
            priority: Priority::High,
            category: Category::AccountSecurity,
            message: "Enable Two-Factor Authentication (2FA)",
            details: "2FA adds an extra layer of security. Enable it for email, banking, and social media accounts.",
            action: "Set up 2FA using authenticator apps (Google Authenticator, Authy) rather than SMS",
            risk_score: 20,
        },
    ),
    Rule::new(
        public_wifi_without_vpn,
        Recommendation {
            rule: RuleId::PublicWifiWithoutVpn,
            priority: Priority::High,
            category: Category::NetworkSecurity,
            message: "Use VPN on public Wi-Fi networks",
            details: "Public Wi-Fi is vulnerable to interception. A VPN encrypts your connection.",
            action: "Install a trusted VPN service (Mullvad, ProtonVPN, or NordVPN)",
            risk_score: 18,
        },
    ),
    Rule::new(
        lacks_vpn,
        Recommendation {
            rule: RuleId::NoVpn,
            priority: Priority::Medium,
            category: Category::NetworkSecurity,
            message: "Consider using a VPN for all internet activity",
            details: "VPNs protect your privacy by hiding your IP address and encrypting traffic.",
            action: "Research and subscribe to a reputable VPN service",
            risk_score: 12,
        },
    ),
    Rule::new(
        skips_os_updates,
        Recommendation {
            rule: RuleId::NoOsUpdates,
            priority: Priority::High,
            category: Category::DeviceSecurity,
            message: "Keep your operating system and apps updated",
            details: "Updates patch security vulnerabilities. Enable automatic updates when possible.",
            action: "Check for and install all pending system and app updates now",
            risk_score: 15,
        },
    ),
    Rule::new(
        grants_many_permissions,
        Recommendation {
            rule: RuleId::ExcessAppPermissions,
            priority: Priority::Medium,
            category: Category::PrivacySettings,
            message: "Review and restrict app permissions",
            details: "Many apps request unnecessary permissions. Limit access to location, contacts, camera, and microphone.",
            action: "Go to Settings → Privacy and revoke unnecessary permissions",
            risk_score: 10,
        },
    ),
    Rule::new(
        heavy_social_media,
        Recommendation {
            rule: RuleId::HeavySocialMedia,
            priority: Priority::Medium,
            category: Category::SocialMediaPrivacy,
            message: "Review privacy settings on social media",
            details: "Limit who can see your posts, location, and personal information.",
            action: "Set profiles to private, disable location sharing, and review friend lists",
            risk_score: 8,
        },
    ),
    Rule::new(
        skips_backups,
        Recommendation {
            rule: RuleId::NoBackups,
            priority: Priority::Medium,
            category: Category::DataProtection,
            message: "Implement regular data backups",
            details: "Protect against data loss from ransomware, hardware failure, or theft.",
            action: "Set up automated backups using cloud services or external drives (3-2-1 backup rule)",
            risk_score: 10,
        },
    ),
    Rule::new(
        lacks_email_encryption,
        Recommendation {
            rule: RuleId::NoEmailEncryption,
            priority: Priority::Low,
            category: Category::CommunicationSecurity,
            message: "Consider email encryption for sensitive communications",
            details: "For sensitive information, use encrypted email services or PGP encryption.",
            action: "Explore ProtonMail or Tutanota for encrypted email",
            risk_score: 5,
        },
    ),
];
