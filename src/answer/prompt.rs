// Fixed prompt text and canned replies

use crate::providers::ChatMessage;

pub const SYSTEM_INSTRUCTION: &str = "You are a human-like project assistant. \
Structure answers in three parts unless unnecessary: \
(1) a short introductory paragraph summarizing the answer, \
(2) a concise bullet list highlighting key points or items, \
(3) a short concluding paragraph with insight or context. \
Do NOT sound like a database or CSV export. \
Use ONLY the information from the knowledge base. \
Do not invent data. \
Keep bullets short and meaningful.";

pub const NO_DATA_REPLY: &str = "I do not have any project or work item data yet. \
Please fill the CSV files and try again.";

pub const GREETING_REPLY: &str =
    "Hello! How can I help you with your work items or projects today?";

pub const THANKS_REPLY: &str =
    "You're welcome! If you have any questions about your work items or projects, just ask.";

/// Instruction, knowledge base and question as three messages.
pub fn build_messages(knowledge_base: &str, question: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_INSTRUCTION),
        ChatMessage::system(format!("Knowledge base:\n{}", knowledge_base)),
        ChatMessage::user(question),
    ]
}
