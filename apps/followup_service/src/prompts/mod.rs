pub mod polish_prompt;
