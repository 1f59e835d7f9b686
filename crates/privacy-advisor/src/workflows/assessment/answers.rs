use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Fixed question vocabulary understood by the advisor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKey {
    PasswordReuse,
    PasswordManager,
    TwoFactor,
    PublicWifi,
    Vpn,
    OsUpdate,
    BackupData,
    EmailEncryption,
    AppPermissions,
    SocialMedia,
    Devices,
}

/// Shape of the value a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    YesNo,
    StringList,
}

impl QuestionKey {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::PasswordReuse,
            Self::PasswordManager,
            Self::TwoFactor,
            Self::PublicWifi,
            Self::Vpn,
            Self::OsUpdate,
            Self::BackupData,
            Self::EmailEncryption,
            Self::AppPermissions,
            Self::SocialMedia,
            Self::Devices,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::PasswordReuse => "password_reuse",
            Self::PasswordManager => "password_manager",
            Self::TwoFactor => "two_factor",
            Self::PublicWifi => "public_wifi",
            Self::Vpn => "vpn",
            Self::OsUpdate => "os_update",
            Self::BackupData => "backup_data",
            Self::EmailEncryption => "email_encryption",
            Self::AppPermissions => "app_permissions",
            Self::SocialMedia => "social_media",
            Self::Devices => "devices",
        }
    }

    pub const fn kind(self) -> AnswerKind {
        match self {
            Self::AppPermissions | Self::SocialMedia | Self::Devices => AnswerKind::StringList,
            _ => AnswerKind::YesNo,
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|key| key.key() == raw)
    }

    /// Human wording used in validation messages, e.g. "password reuse".
    pub fn phrase(self) -> String {
        self.key().replace('_', " ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YesNo {
    Yes,
    No,
    #[default]
    Unanswered,
}

impl YesNo {
    /// Wire form: only the exact literals `yes` and `no` count as answers.
    pub fn from_literal(raw: &str) -> Self {
        match raw {
            "yes" => Self::Yes,
            "no" => Self::No,
            _ => Self::Unanswered,
        }
    }

    /// Lenient reading of a typed reply (`y`, `No `, ...). `None` means the
    /// reply was not a yes/no at all.
    pub fn parse_response(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Some(Self::Yes),
            "no" | "n" => Some(Self::No),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unanswered => "Unknown",
        }
    }
}

/// Splits a free-text multi-select reply. A blank reply or `none` selects nothing.
pub fn parse_token_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Vec::new();
    }
    trimmed.split_whitespace().map(str::to_string).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    YesNo(YesNo),
    StringList(Vec<String>),
}

impl AnswerValue {
    fn from_json(kind: AnswerKind, value: Value) -> Option<Self> {
        match (kind, value) {
            (_, Value::Null) => None,
            (AnswerKind::YesNo, Value::String(raw)) => Some(Self::YesNo(YesNo::from_literal(&raw))),
            (AnswerKind::YesNo, _) => Some(Self::YesNo(YesNo::Unanswered)),
            (AnswerKind::StringList, Value::Array(items)) => Some(Self::StringList(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(token) => Some(token),
                        _ => None,
                    })
                    .collect(),
            )),
            (AnswerKind::StringList, Value::String(token)) => Some(Self::StringList(vec![token])),
            (AnswerKind::StringList, _) => Some(Self::StringList(Vec::new())),
        }
    }
}

/// Caller-supplied answers keyed by question. Lookups never fail: a missing or
/// mismatched value reads as `Unanswered` or as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<QuestionKey, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_yes_no(mut self, key: QuestionKey, answer: YesNo) -> Self {
        self.set_yes_no(key, answer);
        self
    }

    pub fn with_list<I, S>(mut self, key: QuestionKey, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_list(key, items);
        self
    }

    pub fn set_yes_no(&mut self, key: QuestionKey, answer: YesNo) {
        self.values.insert(key, AnswerValue::YesNo(answer));
    }

    pub fn set_list<I, S>(&mut self, key: QuestionKey, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.values.insert(key, AnswerValue::StringList(items));
    }

    pub fn get(&self, key: QuestionKey) -> Option<&AnswerValue> {
        self.values.get(&key)
    }

    pub fn yes_no(&self, key: QuestionKey) -> YesNo {
        match self.values.get(&key) {
            Some(AnswerValue::YesNo(answer)) => *answer,
            _ => YesNo::Unanswered,
        }
    }

    pub fn list(&self, key: QuestionKey) -> &[String] {
        match self.values.get(&key) {
            Some(AnswerValue::StringList(items)) => items,
            _ => &[],
        }
    }

    pub fn is_answered(&self, key: QuestionKey) -> bool {
        match key.kind() {
            AnswerKind::YesNo => self.yes_no(key) != YesNo::Unanswered,
            AnswerKind::StringList => self.values.contains_key(&key),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builds an answer set from a decoded JSON object, ignoring unknown keys.
    pub fn from_json_map(raw: serde_json::Map<String, Value>) -> Self {
        let values = raw
            .into_iter()
            .filter_map(|(name, value)| {
                let key = QuestionKey::from_key(&name)?;
                AnswerValue::from_json(key.kind(), value).map(|answer| (key, answer))
            })
            .collect();
        Self { values }
    }
}

impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_json_map(raw))
    }
}

impl FromIterator<(QuestionKey, AnswerValue)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionKey, AnswerValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
