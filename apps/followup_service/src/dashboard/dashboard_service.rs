use rand::Rng;
use serde::Serialize;

/// Made-up numbers for the dashboard header. Nothing here is measured.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub revived_leads: u32,
    pub follow_ups_sent: u32,
    pub conversion_boost_percent: u32,
    pub hours_saved: u32,
}

pub struct DashboardService;

impl DashboardService {
    pub fn snapshot() -> DashboardSnapshot {
        Self::snapshot_with(&mut rand::rng())
    }

    pub fn snapshot_with<R: Rng>(rng: &mut R) -> DashboardSnapshot {
        DashboardSnapshot {
            revived_leads: rng.random_range(12..=55),
            follow_ups_sent: rng.random_range(70..=180),
            conversion_boost_percent: rng.random_range(20..=45),
            hours_saved: rng.random_range(24..=120),
        }
    }
}
