//! Built-in events shipped with the calendar.

use chrono::NaiveDate;

use crate::domain::{Event, EventFeatures, EventId, PricePair, Pricing, RESEARCH_ACCESS_PRICE};

struct Seed {
    title: &'static str,
    monastery: &'static str,
    date: (i32, u32, u32),
    time: &'static str,
    event_type: &'static str,
    description: &'static str,
    location: &'static str,
    capacity: u32,
    booked: u32,
    tourist_price: &'static str,
    tags: &'static [&'static str],
    image: &'static str,
    features: EventFeatures,
}

const NO_FEATURES: EventFeatures = EventFeatures {
    audio_guide: false,
    virtual_preview: false,
    requires_prebooking: false,
};

const SEEDS: &[Seed] = &[
    Seed {
        title: "Losar Festival",
        monastery: "Rumtek Monastery",
        date: (2025, 9, 20),
        time: "06:00 AM - 06:00 PM",
        event_type: "Major Festival",
        description: "Tibetan New Year celebrations with prayers, masked dances and butter lamp offerings.\nVisitors may join the evening procession.",
        location: "Main Prayer Hall",
        capacity: 500,
        booked: 342,
        tourist_price: "₹500",
        tags: &["New Year", "Cham Dance", "Prayers"],
        image: "/images/events/losar.jpg",
        features: EventFeatures {
            audio_guide: true,
            virtual_preview: true,
            requires_prebooking: true,
        },
    },
    Seed {
        title: "Pang Lhabsol",
        monastery: "Pemayangtse Monastery",
        date: (2025, 9, 7),
        time: "08:00 AM - 04:00 PM",
        event_type: "Major Festival",
        description: "Homage to Mount Khangchendzonga, guardian deity of Sikkim, with warrior dances.",
        location: "Monastery Courtyard",
        capacity: 300,
        booked: 120,
        tourist_price: "₹400",
        tags: &["Khangchendzonga", "Warrior Dance"],
        image: "/images/events/pang-lhabsol.jpg",
        features: EventFeatures {
            audio_guide: true,
            virtual_preview: false,
            requires_prebooking: false,
        },
    },
    Seed {
        title: "Bumchu Ceremony",
        monastery: "Tashiding Monastery",
        date: (2026, 3, 3),
        time: "05:00 AM - 11:00 AM",
        event_type: "Sacred Ritual",
        description: "Opening of the sacred water vase; the water level foretells the year ahead.",
        location: "Bumchu Shrine",
        capacity: 200,
        booked: 200,
        tourist_price: "₹250",
        tags: &["Holy Water", "Prophecy"],
        image: "/images/events/bumchu.jpg",
        features: EventFeatures {
            audio_guide: false,
            virtual_preview: true,
            requires_prebooking: true,
        },
    },
    Seed {
        title: "Saga Dawa Procession",
        monastery: "Enchey Monastery",
        date: (2025, 9, 20),
        time: "07:00 AM - 01:00 PM",
        event_type: "Religious Festival",
        description: "Scriptures are carried around Gangtok to mark the Buddha's enlightenment.",
        location: "Enchey Gate",
        capacity: 400,
        booked: 87,
        tourist_price: "Free",
        tags: &["Procession", "Buddha Purnima"],
        image: "/images/events/saga-dawa.jpg",
        features: EventFeatures {
            audio_guide: true,
            virtual_preview: false,
            requires_prebooking: false,
        },
    },
    Seed {
        title: "Thangka Painting Workshop",
        monastery: "Rumtek Monastery",
        date: (2025, 10, 12),
        time: "10:00 AM - 04:00 PM",
        event_type: "Cultural Workshop",
        description: "Hands-on introduction to mineral pigments and iconometry with resident painters.",
        location: "Art Studio",
        capacity: 20,
        booked: 14,
        tourist_price: "₹1500",
        tags: &["Art", "Cultural Heritage"],
        image: "/images/events/thangka.jpg",
        features: NO_FEATURES,
    },
    Seed {
        title: "Vipassana Meditation Retreat",
        monastery: "Ralang Monastery",
        date: (2025, 11, 2),
        time: "05:30 AM - 08:00 PM",
        event_type: "Spiritual Retreat",
        description: "A silent day of guided sitting and walking meditation.",
        location: "Retreat Centre",
        capacity: 30,
        booked: 9,
        tourist_price: "₹2000",
        tags: &["Meditation", "Silence"],
        image: "/images/events/retreat.jpg",
        features: EventFeatures {
            audio_guide: true,
            virtual_preview: false,
            requires_prebooking: true,
        },
    },
    Seed {
        title: "Manuscript Preservation Seminar",
        monastery: "Phodong Monastery",
        date: (2025, 12, 5),
        time: "11:00 AM - 02:00 PM",
        event_type: "Cultural Event",
        description: "Conservators present work on the monastery's Kangyur collection.",
        location: "Library Hall",
        capacity: 40,
        booked: 22,
        tourist_price: "₹300",
        tags: &["Cultural Heritage", "Archives", "Research"],
        image: "/images/events/manuscripts.jpg",
        features: EventFeatures {
            audio_guide: false,
            virtual_preview: true,
            requires_prebooking: true,
        },
    },
    Seed {
        title: "Kagyed Dance",
        monastery: "Phodong Monastery",
        date: (2025, 12, 17),
        time: "09:00 AM - 03:00 PM",
        event_type: "Ritual Dance",
        description: "Masked dances that burn away the misfortunes of the passing year.",
        location: "Monastery Courtyard",
        capacity: 250,
        booked: 61,
        tourist_price: "₹350",
        tags: &["Cham Dance", "Year End"],
        image: "/images/events/kagyed.jpg",
        features: NO_FEATURES,
    },
];

/// Build the built-in event list with ids `1..=n` in declaration order
pub fn builtin_events() -> Vec<Event> {
    SEEDS
        .iter()
        .enumerate()
        .filter_map(|(index, seed)| {
            let (y, m, d) = seed.date;
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(Event {
                id: EventId(index as u32 + 1),
                title: seed.title.to_string(),
                monastery: seed.monastery.to_string(),
                date,
                time: seed.time.to_string(),
                event_type: seed.event_type.to_string(),
                description: seed.description.to_string(),
                location: seed.location.to_string(),
                capacity: seed.capacity,
                booked: seed.booked,
                pricing: Pricing::ByAudience(PricePair::new(
                    seed.tourist_price,
                    RESEARCH_ACCESS_PRICE,
                )),
                tags: seed.tags.iter().map(|t| t.to_string()).collect(),
                image: seed.image.to_string(),
                features: seed.features,
            })
        })
        .collect()
}
