//! Static reading library for the Knowledge screen.

pub struct Text {
    pub title: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub description: &'static str,
}

pub const TEXTS: [Text; 3] = [
    Text {
        title: "Complete Works of Ram Chandra - Volume 1",
        author: "Babuji Maharaj",
        category: "Foundation",
        read_time: "2 hours",
        description: "Essential teachings on the fundamentals of Sahaj Marg practice",
    },
    Text {
        title: "Reality at Dawn",
        author: "Babuji Maharaj",
        category: "Philosophy",
        read_time: "3 hours",
        description: "Deep insights into the spiritual reality and human consciousness",
    },
    Text {
        title: "Ten Maxims of Sahaj Marg",
        author: "Babuji Maharaj",
        category: "Practice",
        read_time: "30 minutes",
        description: "Practical guidance for daily spiritual living",
    },
];

pub const LIBRARY_THOUGHT: (&str, &str) = (
    "The heart is the field of action. It is there that transformation is brought about, where the Divine culture is best developed.",
    "Babuji Maharaj",
);

/// Shown on the dashboard.
pub const DAILY_THOUGHT: (&str, &str) = (
    "Love alone is capable of uniting living beings in such a way as to complete and fulfill them, for it alone takes them and joins them by what is deepest in themselves.",
    "Master Chariji",
);

pub const TEN_MAXIMS: [&str; 4] = [
    "Rise before dawn and meditate",
    "Take everything as coming from the Divine",
    "Be plain and simple",
    "Be truthful and lead life with love",
];

pub const DAILY_PRACTICE: [&str; 4] = [
    "Morning meditation before sunrise",
    "Evening cleaning after sunset",
    "9 PM universal prayer",
    "Bedtime meditation on Point A",
];

pub const SITTING_GUIDANCE: [&str; 5] = [
    "Sit comfortably with your back straight",
    "Close your eyes gently and turn your attention inward",
    "Feel the divine light in your heart",
    "Surrender to the Master's transmission with love",
    "Let thoughts come and go without resistance",
];
