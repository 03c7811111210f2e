use crate::language_model::tone::Tone;

pub struct PolishPrompt;

impl PolishPrompt {
    pub fn get_prompt(text: &str, context: &str, tone: Tone) -> String {
        format!(
            r#"You are a sales assistant polishing a follow-up message to a lead.

Draft message:
"{}"

Conversation context:
{}

Instructions:
1. Rewrite the draft in a {} tone
2. Keep the lead's name and every offer in the draft
3. Keep it short enough for a chat message (two or three sentences)
4. End with a sign-off in the spirit of: "{}"

Reply with the final message only, without quotes, explanations or meta-commentary."#,
            text,
            context,
            tone.label().to_lowercase(),
            tone.sign_off()
        )
    }
}
