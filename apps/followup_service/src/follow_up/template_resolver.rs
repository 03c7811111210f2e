use serde::Serialize;

pub const NAME_PLACEHOLDER: &str = "{{name}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Industry {
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Clinics / Dental")]
    ClinicsDental,
    #[serde(rename = "Automobile Sales")]
    AutomobileSales,
    #[serde(rename = "Education / Coaching")]
    EducationCoaching,
    #[serde(rename = "Finance / Loans")]
    FinanceLoans,
    #[serde(rename = "Immigration")]
    Immigration,
    #[serde(rename = "Generic / Other")]
    GenericOther,
}

impl Industry {
    pub const ALL: [Industry; 7] = [
        Industry::RealEstate,
        Industry::ClinicsDental,
        Industry::AutomobileSales,
        Industry::EducationCoaching,
        Industry::FinanceLoans,
        Industry::Immigration,
        Industry::GenericOther,
    ];

    /// Used when a label matches none of the known industries.
    pub const DEFAULT: Industry = Industry::GenericOther;

    pub fn label(self) -> &'static str {
        match self {
            Industry::RealEstate => "Real Estate",
            Industry::ClinicsDental => "Clinics / Dental",
            Industry::AutomobileSales => "Automobile Sales",
            Industry::EducationCoaching => "Education / Coaching",
            Industry::FinanceLoans => "Finance / Loans",
            Industry::Immigration => "Immigration",
            Industry::GenericOther => "Generic / Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Industry> {
        Industry::ALL.into_iter().find(|industry| industry.label() == label)
    }

    pub fn pattern(self) -> &'static str {
        match self {
            Industry::RealEstate => "Hi {{name}}, following up on the property you checked earlier. Want updated pricing or available units?",
            Industry::ClinicsDental => "Hi {{name}}, checking in about your consultation. I can send doctor slots or treatment costs.",
            Industry::AutomobileSales => "Hi {{name}}, we have updated prices & variants for the car you enquired about. Want details?",
            Industry::EducationCoaching => "Hi {{name}}, I can share course fees, syllabus, and new batch timings.",
            Industry::FinanceLoans => "Hi {{name}}, I can help you with your loan enquiry. I can pre-check eligibility and share updated interest rates.",
            Industry::Immigration => "Hi {{name}}, following up on your immigration consultation request. I can share eligibility, process steps, and booking link.",
            Industry::GenericOther => "Hi {{name}}, just checking in — did you get the info you needed?",
        }
    }
}

/// Pattern for a category label. Unknown labels silently get the
/// `Generic / Other` pattern; resolution never fails.
pub fn pattern_for(label: &str) -> &'static str {
    match Industry::from_label(label) {
        Some(industry) => industry.pattern(),
        None => Industry::DEFAULT.pattern(),
    }
}

/// Fill the pattern for `label` with `lead_name`. The name is inserted
/// verbatim at every placeholder.
pub fn resolve(label: &str, lead_name: &str) -> String {
    pattern_for(label).replace(NAME_PLACEHOLDER, lead_name)
}
