use chrono::{DateTime, TimeZone, Utc};

use crate::domain::Review;
use crate::store::new_id;

/// (name, email, rating, comment, day of December 2024)
const SAMPLES: [(&str, &str, u8, &str, u32); 6] = [
    (
        "Sarah M.",
        "sarah.m@example.com",
        5,
        "I've read dozens of IBS books. This is the first one that actually made sense of my 15-year nightmare. Finally, someone who gets it.",
        15,
    ),
    (
        "Dr. Michael K.",
        "m.kent@medicalpractice.com",
        5,
        "The research is solid, the explanations are clear, and for the first time in years, I have hope. This book changed my perspective completely.",
        20,
    ),
    (
        "Anonymous",
        "anonymous@privacy.com",
        5,
        "Jane's story made me cry because it's MY story. But knowing I'm not alone and there's a path forward... that's everything.",
        22,
    ),
    (
        "Emma R.",
        "emma.recovery@gmail.com",
        5,
        "After 8 years of being told 'it's just stress,' this book finally gave me answers. I'm not cured yet, but I understand my body now.",
        18,
    ),
    (
        "David C.",
        "david.chronic@outlook.com",
        4,
        "The scientific approach really spoke to me. No false promises, just honest research and practical insights. Worth every penny.",
        21,
    ),
    (
        "Maria S.",
        "maria.silent@proton.me",
        5,
        "I've suffered in silence for so long. Reading about Jane's journey made me feel less alone. This book is a lifeline.",
        19,
    ),
];

/// The reviews the site launched with. Each call hands out fresh ids.
pub fn sample_reviews() -> Vec<Review> {
    SAMPLES
        .iter()
        .map(|&(name, email, rating, comment, day)| Review {
            id: new_id(),
            name: name.to_string(),
            email: email.to_string(),
            rating,
            comment: comment.to_string(),
            created_at: december_2024(day),
        })
        .collect()
}

fn december_2024(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, day, 0, 0, 0)
        .single()
        .expect("sample review dates are valid calendar days")
}
