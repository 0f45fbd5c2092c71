//! Sample progress data shown on the Progress screen. Fixed values; nothing
//! is aggregated from real sessions.

pub struct Summary {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_sessions: u32,
    pub this_month: u32,
    pub avg_duration_min: u32,
    pub consistency_pct: u16,
}

pub struct MonthStat {
    pub month: &'static str,
    pub sessions: u32,
    pub consistency_pct: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Peaceful,
    Grateful,
    Serene,
    Focused,
    Loving,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Self::Peaceful => "peaceful",
            Self::Grateful => "grateful",
            Self::Serene => "serene",
            Self::Focused => "focused",
            Self::Loving => "loving",
        }
    }
}

pub struct RecentSession {
    pub when: &'static str,
    pub practice: &'static str,
    pub minutes: u32,
    pub mood: Mood,
}

pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub earned: bool,
}

pub const SUMMARY: Summary = Summary {
    current_streak: 7,
    longest_streak: 21,
    total_sessions: 156,
    this_month: 28,
    avg_duration_min: 25,
    consistency_pct: 85,
};

pub const MONTHLY: [MonthStat; 6] = [
    MonthStat { month: "Jan", sessions: 25, consistency_pct: 80 },
    MonthStat { month: "Feb", sessions: 28, consistency_pct: 85 },
    MonthStat { month: "Mar", sessions: 30, consistency_pct: 90 },
    MonthStat { month: "Apr", sessions: 28, consistency_pct: 85 },
    MonthStat { month: "May", sessions: 32, consistency_pct: 95 },
    MonthStat { month: "Jun", sessions: 28, consistency_pct: 85 },
];

pub const RECENT: [RecentSession; 5] = [
    RecentSession { when: "Today", practice: "Morning Meditation", minutes: 30, mood: Mood::Peaceful },
    RecentSession { when: "Yesterday", practice: "Evening Cleaning", minutes: 15, mood: Mood::Grateful },
    RecentSession { when: "Yesterday", practice: "Night Meditation", minutes: 25, mood: Mood::Serene },
    RecentSession { when: "2 days ago", practice: "Morning Meditation", minutes: 30, mood: Mood::Focused },
    RecentSession { when: "2 days ago", practice: "9 PM Prayer", minutes: 10, mood: Mood::Loving },
];

pub const ACHIEVEMENTS: [Achievement; 6] = [
    Achievement { title: "First Week", description: "Completed 7 consecutive days", icon: "🌱", earned: true },
    Achievement { title: "Devoted Heart", description: "50 meditation sessions", icon: "💖", earned: true },
    Achievement { title: "Morning Warrior", description: "30 morning meditations", icon: "🌅", earned: true },
    Achievement { title: "Consistent Soul", description: "21-day streak", icon: "🔥", earned: true },
    Achievement { title: "Hundred Hearts", description: "100 total sessions", icon: "💯", earned: true },
    Achievement { title: "Master's Grace", description: "6 months of practice", icon: "🙏", earned: false },
];

pub fn earned_count() -> usize {
    ACHIEVEMENTS.iter().filter(|a| a.earned).count()
}

pub fn max_monthly_sessions() -> u32 {
    MONTHLY.iter().map(|m| m.sessions).max().unwrap_or(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_is_consistent() {
        assert_eq!(earned_count(), 5);
        assert_eq!(max_monthly_sessions(), 32);
        assert!(SUMMARY.current_streak <= SUMMARY.longest_streak);
        assert!(MONTHLY.iter().all(|m| m.consistency_pct <= 100));
    }
}
