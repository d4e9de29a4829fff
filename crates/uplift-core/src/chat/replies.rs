//! Canned replies of the demo academic assistant.
//!
//! A question is matched against keyword groups in a fixed order and the
//! first group that matches decides the reply.

use strum::Display;

/// Shown when the assistant could not produce a reply.
pub const FAILURE_REPLY: &str = "Sorry, I encountered an error. Please try again later.";

/// Number of characters of the question echoed back by the fallback reply.
const ECHO_CHARS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ReplyTopic {
    Assignment,
    Exam,
    Registration,
    FinancialAid,
    General,
}

/// Ordered keyword table. Order matters: "assignment for the exam" is an
/// assignment question.
const TOPICS: &[(ReplyTopic, &[&str], &str)] = &[
    (
        ReplyTopic::Assignment,
        &["assignment", "homework"],
        "For assignment help, I recommend checking the module guidelines on eFundi or contacting your module lecturer. You can also visit the Writing Center for assistance with academic writing.",
    ),
    (
        ReplyTopic::Exam,
        &["exam", "test"],
        "For exam preparation, review your lecture notes, practice with past papers, and consider forming a study group. The library has designated study areas, and many faculties offer exam preparation workshops.",
    ),
    (
        ReplyTopic::Registration,
        &["registration", "enroll"],
        "Registration for the next academic year typically opens in October. You can complete the process online through the Student Self-Service Portal or visit the Registration Office for assistance.",
    ),
    (
        ReplyTopic::FinancialAid,
        &["bursary", "financial aid", "nsfas"],
        "For financial aid information, visit the Financial Aid Office or check the Bursaries section in this app. NSFAS applications for the next academic year usually open in September.",
    ),
];

impl ReplyTopic {
    /// Classifies a question by the first matching keyword group.
    pub fn classify(question: &str) -> Self {
        let lower = question.to_lowercase();
        TOPICS
            .iter()
            .find(|(_, keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(topic, _, _)| *topic)
            .unwrap_or(ReplyTopic::General)
    }
}

/// Returns the assistant's reply to `question`.
pub fn canned_reply(question: &str) -> String {
    let topic = ReplyTopic::classify(question);
    TOPICS
        .iter()
        .find(|(t, _, _)| *t == topic)
        .map(|(_, _, reply)| (*reply).to_string())
        .unwrap_or_else(|| general_reply(question))
}

fn general_reply(question: &str) -> String {
    let excerpt: String = question.chars().take(ECHO_CHARS).collect();
    format!(
        "I understand you're asking about {excerpt}... To provide more specific help, could you provide more details about your question? I can assist with academic content, university procedures, or direct you to the right resources."
    )
}
