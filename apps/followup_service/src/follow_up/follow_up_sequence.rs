//! The multi-day follow-up plan shown on the demo page. Display only:
//! nothing here schedules or sends anything.

pub const DEFAULT_STEPS: [&str; 4] = [
    "Day 1: Soft nudge — ask if they need more info.",
    "Day 2: Value add — send useful asset (pricing PDF or checklist).",
    "Day 3: Urgency angle — limited slots/units available.",
    "Day 5: Final ping — last chance / callback offer.",
];

pub fn default_steps() -> Vec<String> {
    DEFAULT_STEPS.iter().map(|step| step.to_string()).collect()
}

/// One step per line; surrounding whitespace is trimmed and blank lines dropped.
pub fn customize(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
