use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Urgent,
    Persuasive,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Professional, Tone::Casual, Tone::Urgent, Tone::Persuasive];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Urgent => "Urgent",
            Tone::Persuasive => "Persuasive",
        }
    }

    pub fn sign_off(self) -> &'static str {
        match self {
            Tone::Professional => "Regards, Team",
            Tone::Casual => "Cheers!",
            Tone::Urgent => "Limited slots — act now!",
            Tone::Persuasive => "Many clients decide in 24 hours — don't miss out!",
        }
    }
}
