//! Prompt templates for the advice service. The wording follows the
//! original flows; each template additionally pins down the JSON reply
//! shape since responses are requested in JSON mode.

use shared::{ChatMessage, Mood, Transaction};
use std::fmt::Write;

pub fn detect_mood_from_text(text: &str) -> String {
    format!(
        "You are a sentiment analysis expert. Your task is to determine the user's mood \
         from the given text.\n\
         The mood must be one of the following options: happy, sad, neutral, stressed, \
         anxious, or tired.\n\n\
         Analyze the following text and return only the determined mood.\n\n\
         Text: {text}\n\n\
         Reply with JSON of the form {{\"mood\": \"<mood>\"}}."
    )
}

pub fn detect_mood_from_image() -> String {
    "You are an AI that can detect the mood of a person from an image.\n\n\
     Analyze the image provided and determine the mood of the person in the image. \
     The mood can be happy, sad, neutral, stressed, anxious, or tired.\n\n\
     Reply with JSON of the form {\"mood\": \"<mood>\"}."
        .to_string()
}

pub fn advice_for_mood(mood: Mood) -> String {
    format!(
        "You are a financial advisor. Based on the user's mood, provide personalized \
         financial advice.\n\n\
         Mood: {mood}\n\n\
         Reply with JSON of the form {{\"advice\": \"<advice>\"}}."
    )
}

pub fn expense_advice(history: &[ChatMessage]) -> String {
    let mut rendered = String::new();
    for message in history {
        let role = match message.role {
            shared::ChatRole::User => "user",
            shared::ChatRole::Model => "model",
        };
        let _ = writeln!(rendered, "{}: {}", role, message.content);
    }
    format!(
        "You are a friendly and helpful financial advisor. Your goal is to analyze the \
         user's expense-related questions and provide concise, helpful advice. Analyze \
         the provided conversation history to understand the context.\n\n\
         Conversation History:\n{rendered}\n\
         Based on the last user message, provide a helpful and non-judgmental response. \
         If the user provides amounts, you can do some basic analysis.\n\n\
         Reply with JSON of the form {{\"advice\": \"<advice>\"}}."
    )
}

pub fn expense_summary(transactions: &[Transaction]) -> String {
    let mut rendered = String::new();
    for t in transactions {
        let _ = writeln!(
            rendered,
            "- Date: {}, Category: {}, Amount: ₹{}, Mood: {}",
            t.date, t.category, t.amount, t.mood
        );
    }
    format!(
        "You are a financial analyst. Analyze the following list of transactions and \
         provide a short, insightful summary (2-3 sentences) of the user's spending \
         habits. Also provide the total spending, total number of transactions, and the \
         category with the highest spending. The currency is Rupees (₹).\n\n\
         Transactions:\n{rendered}\n\
         Reply with JSON of the form {{\"summary\": \"<text>\", \"totalSpent\": <number>, \
         \"transactionCount\": <number>, \"topCategory\": \"<category>\"}}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ChatRole, TimeOfDay};

    #[test]
    fn summary_prompt_lists_every_transaction() {
        let transactions = vec![Transaction {
            id: "1".to_string(),
            date: "01/01/2025".to_string(),
            time_of_day: TimeOfDay::Morning,
            mood: Mood::Happy,
            category: "Coffee".to_string(),
            amount: 100.0,
            recommendation: String::new(),
        }];
        let prompt = expense_summary(&transactions);
        assert!(prompt.contains("- Date: 01/01/2025, Category: Coffee, Amount: ₹100, Mood: happy"));
        assert!(prompt.contains("Rupees"));
    }

    #[test]
    fn chat_prompt_renders_roles_in_order() {
        let history = vec![
            ChatMessage {
                role: ChatRole::User,
                content: "I spent $50 on coffee this week".to_string(),
            },
            ChatMessage {
                role: ChatRole::Model,
                content: "That adds up quickly.".to_string(),
            },
        ];
        let prompt = expense_advice(&history);
        let user_at = prompt.find("user: I spent").unwrap();
        let model_at = prompt.find("model: That adds up").unwrap();
        assert!(user_at < model_at);
    }
}
