//! Static practice content: practice kinds, duration presets and guided
//! sessions. Nothing in here changes at runtime.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// Practice Kinds
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PracticeKind {
    Morning,
    Evening,
    Prayer,
    Night,
}

/// Presentation hue for a practice. The active theme decides the real color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Amber,
    Blue,
    Purple,
    Indigo,
}

#[derive(Debug, Clone, Copy)]
pub struct PracticeInfo {
    pub id: &'static str,
    pub name: &'static str,
    /// Label used on the timer screen.
    pub timer_label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub default_time: (u32, u32),
    pub color: ColorTag,
}

static PRACTICES: [PracticeInfo; 4] = [
    PracticeInfo {
        id: "morning",
        name: "Morning Meditation",
        timer_label: "Point B Meditation",
        description: "Point B Meditation - Before sunrise with divine transmission",
        icon: "🌅",
        default_time: (5, 30),
        color: ColorTag::Amber,
    },
    PracticeInfo {
        id: "evening",
        name: "Evening Cleaning",
        timer_label: "Evening Cleaning",
        description: "Remove impressions of the day - After sunset",
        icon: "🌇",
        default_time: (19, 0),
        color: ColorTag::Blue,
    },
    PracticeInfo {
        id: "prayer",
        name: "9 PM Prayer",
        timer_label: "Prayer Session",
        description: "Universal Prayer for all humanity",
        icon: "🕘",
        default_time: (21, 0),
        color: ColorTag::Purple,
    },
    PracticeInfo {
        id: "night",
        name: "Night Meditation",
        timer_label: "Point A Meditation",
        description: "Point A Meditation and Night Prayer before sleep",
        icon: "🌙",
        default_time: (22, 0),
        color: ColorTag::Indigo,
    },
];

impl PracticeKind {
    pub const ALL: [PracticeKind; 4] = [Self::Morning, Self::Evening, Self::Prayer, Self::Night];

    pub fn info(self) -> &'static PracticeInfo {
        &PRACTICES[self as usize]
    }

    pub fn default_time(self) -> NaiveTime {
        let (h, m) = self.info().default_time;
        NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ============================================================================
// Duration Presets
// ============================================================================

pub struct DurationPreset {
    pub label: &'static str,
    pub seconds: u32,
}

pub static DURATION_PRESETS: [DurationPreset; 5] = [
    DurationPreset { label: "10 min", seconds: 600 },
    DurationPreset { label: "20 min", seconds: 1200 },
    DurationPreset { label: "30 min", seconds: 1800 },
    DurationPreset { label: "45 min", seconds: 2700 },
    DurationPreset { label: "1 hour", seconds: 3600 },
];

pub const DEFAULT_DURATION_SECS: u32 = 1800;

/// Index of the preset matching `seconds`, if any.
pub fn preset_index(seconds: u32) -> Option<usize> {
    DURATION_PRESETS.iter().position(|p| p.seconds == seconds)
}

// ============================================================================
// Guided Sessions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidedSessionId {
    MorningMeditation,
    EveningCleaning,
    NinePmPrayer,
    PointAMeditation,
}

#[derive(Debug)]
pub struct GuidedSession {
    pub id: GuidedSessionId,
    pub title: &'static str,
    pub description: &'static str,
    pub minutes: u32,
    pub kind: PracticeKind,
    pub difficulty: Difficulty,
    pub transcript: &'static [&'static str],
}

pub static GUIDED_SESSIONS: [GuidedSession; 4] = [
    GuidedSession {
        id: GuidedSessionId::MorningMeditation,
        title: "Morning Meditation - Point B",
        description: "Connect with divine transmission at the heart center",
        minutes: 20,
        kind: PracticeKind::Morning,
        difficulty: Difficulty::Beginner,
        transcript: &[
            "Welcome to your morning meditation practice.",
            "Find a comfortable seated position with your back straight and natural. Close your eyes gently.",
            "Bring your attention to your heart, to the center of your chest. This is Point B, the seat of divine love.",
            "Feel the presence of the Master's grace flowing into your heart. Don't strain or force anything. Simply be receptive.",
            "If thoughts arise, gently acknowledge them and return to the heart. The Master's transmission is always available to those who approach with love and humility.",
            "Allow yourself to be absorbed in this divine current flowing through your being. Rest in this sacred presence.",
            "When you're ready, slowly bring your awareness back to your surroundings. Take a moment to express gratitude for this divine gift.",
        ],
    },
    GuidedSession {
        id: GuidedSessionId::EveningCleaning,
        title: "Evening Cleaning Practice",
        description: "Remove the day's impressions with divine light",
        minutes: 15,
        kind: PracticeKind::Evening,
        difficulty: Difficulty::Beginner,
        transcript: &[
            "Welcome to the evening cleaning practice. This sacred process helps remove the impressions gathered throughout the day.",
            "Sit comfortably and close your eyes. Take a few deep, natural breaths.",
            "Imagine a brilliant divine light entering from the back of your head, flowing down through your entire body.",
            "This light is cleaning away all the heaviness, stress, and impressions from the day. See it flowing through every cell, every organ, purifying your entire being.",
            "Watch as this light carries away all the worries, tensions, and unnecessary thoughts from today. Let them flow out through your toes and into the earth.",
            "Continue this process, allowing the divine light to cleanse and purify your system completely.",
            "Feel yourself becoming lighter, cleaner, more peaceful with each moment.",
            "When complete, rest in this state of purity and lightness. Express gratitude for this divine cleaning.",
        ],
    },
    GuidedSession {
        id: GuidedSessionId::NinePmPrayer,
        title: "Universal Prayer at 9 PM",
        description: "Join hearts worldwide in prayer for humanity",
        minutes: 10,
        kind: PracticeKind::Prayer,
        difficulty: Difficulty::Beginner,
        transcript: &[
            "It is 9 PM - time for our universal prayer. Let us join hearts with seekers around the world.",
            "Sit quietly and bring your attention to your heart. Feel the presence of the Master.",
            "Now, with deep love and compassion, pray for all of humanity:",
            "\"O Master, may all beings be free from suffering. May all hearts be filled with love and peace. May humanity awaken to its divine nature. May your grace flow to every corner of the earth, touching every soul with your divine love.\"",
            "Feel your heart expanding with love for all creation. Send this love to your family, friends, and even those who may have caused you difficulty.",
            "Extend your love to all seekers on the path, to all spiritual traditions, to all beings everywhere.",
            "Rest in this universal love, knowing that our collective prayer has power to transform the world.",
            "When ready, slowly return your attention to your surroundings, carrying this love with you.",
        ],
    },
    GuidedSession {
        id: GuidedSessionId::PointAMeditation,
        title: "Night Meditation - Point A",
        description: "Evening practice at the seat of divine wisdom",
        minutes: 25,
        kind: PracticeKind::Night,
        difficulty: Difficulty::Intermediate,
        transcript: &[
            "Welcome to your night meditation at Point A. This practice connects you with divine wisdom and prepares your consciousness for rest.",
            "Sit comfortably with your spine naturally straight. Close your eyes and take a few gentle breaths.",
            "Bring your attention to the top of your head, to Point A. This is the seat of divine illumination and wisdom.",
            "Feel the Master's presence above and within you. Allow divine light to descend from above, filling your consciousness.",
            "This is not a mental practice - simply be receptive to the Master's grace at this center. Rest in divine awareness.",
            "If you feel drowsy, it's natural. Allow the consciousness to be absorbed in the divine current flowing through Point A.",
            "Let go of the day completely. Surrender all concerns, all planning, all thinking to the Master's care.",
            "Rest in this divine embrace, allowing the higher consciousness to prepare your soul for divine sleep and dreams.",
            "When ready, slowly conclude with gratitude, knowing that the Master's grace will continue to work through the night.",
        ],
    },
];

impl GuidedSessionId {
    pub fn session(self) -> &'static GuidedSession {
        &GUIDED_SESSIONS[self as usize]
    }
}
