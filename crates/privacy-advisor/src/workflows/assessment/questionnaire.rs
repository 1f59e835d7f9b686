use super::answers::{AnswerKind, AnswerSet, QuestionKey};
use serde::Serialize;

/// Raised when a caller asks for completeness and a yes/no question is unanswered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please answer the question about {}", .question.phrase())]
pub struct IncompleteAnswers {
    pub question: QuestionKey,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub key: QuestionKey,
    pub prompt: &'static str,
    pub help: &'static str,
    pub kind: AnswerKind,
}

impl Question {
    const fn yes_no(key: QuestionKey, prompt: &'static str) -> Self {
        Self {
            key,
            prompt,
            help: "(yes/no)",
            kind: AnswerKind::YesNo,
        }
    }

    const fn multi(key: QuestionKey, prompt: &'static str, help: &'static str) -> Self {
        Self {
            key,
            prompt,
            help,
            kind: AnswerKind::StringList,
        }
    }
}

/// Ordered interview script shared by the chat prompt and the HTTP API.
#[derive(Debug, Clone, Serialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn standard() -> Self {
        Self {
            questions: vec![
                Question::yes_no(
                    QuestionKey::PasswordReuse,
                    "Do you reuse passwords across different accounts?",
                ),
                Question::yes_no(
                    QuestionKey::PasswordManager,
                    "Do you use a password manager to store your passwords?",
                ),
                Question::yes_no(
                    QuestionKey::TwoFactor,
                    "Do you have two-factor authentication (2FA) enabled on important accounts?",
                ),
                Question::yes_no(
                    QuestionKey::PublicWifi,
                    "Do you connect to public Wi-Fi networks (cafes, airports, etc.)?",
                ),
                Question::yes_no(
                    QuestionKey::Vpn,
                    "Do you use a VPN when accessing the internet?",
                ),
                Question::yes_no(
                    QuestionKey::OsUpdate,
                    "Do you keep your operating system and apps up to date?",
                ),
                Question::yes_no(
                    QuestionKey::BackupData,
                    "Do you regularly back up your important data?",
                ),
                Question::yes_no(
                    QuestionKey::EmailEncryption,
                    "Do you use email encryption for sensitive communications?",
                ),
                Question::multi(
                    QuestionKey::AppPermissions,
                    "List app permissions you grant (e.g., Location Contacts Camera Microphone) or type 'None':",
                    "Enter space-separated permissions or 'None'",
                ),
                Question::multi(
                    QuestionKey::SocialMedia,
                    "List social media platforms you use (e.g., Facebook Instagram Twitter) or type 'None':",
                    "Enter space-separated platform names or 'None'",
                ),
            ],
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Fails on the first unanswered yes/no question, in interview order.
    /// List questions may be left empty.
    pub fn validate(&self, answers: &AnswerSet) -> Result<(), IncompleteAnswers> {
        match self
            .questions
            .iter()
            .filter(|question| question.kind == AnswerKind::YesNo)
            .find(|question| !answers.is_answered(question.key))
        {
            Some(question) => Err(IncompleteAnswers {
                question: question.key,
            }),
            None => Ok(()),
        }
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::standard()
    }
}
