use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    AllLevels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanceClass {
    pub slug: &'static str,
    pub title: &'static str,
    pub style: &'static str,
    pub level: Level,
    pub instructor: &'static str,
    pub schedule: &'static str,
    pub duration_minutes: u32,
    pub description: &'static str,
    /// Bucket-relative path of the cover photo.
    pub image_path: &'static str,
}

static CATALOG: &[DanceClass] = &[
    DanceClass {
        slug: "salsa-beginners",
        title: "Salsa Foundations",
        style: "salsa",
        level: Level::Beginner,
        instructor: "Marisol Vega",
        schedule: "Mon & Wed 19:00",
        duration_minutes: 60,
        description: "Basic steps, timing on1 and the first partner turns.",
        image_path: "classes/salsa/foundations.jpg",
    },
    DanceClass {
        slug: "salsa-intermediate",
        title: "Salsa Turn Patterns",
        style: "salsa",
        level: Level::Intermediate,
        instructor: "Marisol Vega",
        schedule: "Mon & Wed 20:15",
        duration_minutes: 75,
        description: "Cross-body lead variations, spins and musical styling.",
        image_path: "classes/salsa/turn-patterns.jpg",
    },
    DanceClass {
        slug: "bachata-sensual",
        title: "Bachata Sensual",
        style: "bachata",
        level: Level::Intermediate,
        instructor: "Diego Ramos",
        schedule: "Tue 19:30",
        duration_minutes: 75,
        description: "Body waves, head movements and connection work in pairs.",
        image_path: "classes/bachata/sensual.jpg",
    },
    DanceClass {
        slug: "bachata-beginners",
        title: "Bachata Basics",
        style: "bachata",
        level: Level::Beginner,
        instructor: "Diego Ramos",
        schedule: "Thu 19:00",
        duration_minutes: 60,
        description: "The basic box, side steps and simple turns.",
        image_path: "classes/bachata/basics.jpg",
    },
    DanceClass {
        slug: "kizomba-all",
        title: "Kizomba Social",
        style: "kizomba",
        level: Level::AllLevels,
        instructor: "Ana Lopes",
        schedule: "Fri 20:00",
        duration_minutes: 90,
        description: "Walks, saidas and floor craft, followed by a social practice.",
        image_path: "classes/kizomba/social.jpg",
    },
    DanceClass {
        slug: "contemporary-advanced",
        title: "Contemporary Lab",
        style: "contemporary",
        level: Level::Advanced,
        instructor: "Ines Costa",
        schedule: "Sat 11:00",
        duration_minutes: 90,
        description: "Floor work, release technique and improvisation scores.",
        image_path: "classes/contemporary/lab.jpg",
    },
    DanceClass {
        slug: "kids-hip-hop",
        title: "Kids Hip Hop",
        style: "hip_hop",
        level: Level::Beginner,
        instructor: "Tiago Reis",
        schedule: "Sat 10:00",
        duration_minutes: 45,
        description: "Grooves, freezes and short routines for ages 7 to 12.",
        image_path: "classes/hip-hop/kids.jpg",
    },
];

pub fn catalog() -> &'static [DanceClass] {
    CATALOG
}

pub fn find(slug: &str) -> Option<&'static DanceClass> {
    CATALOG.iter().find(|c| c.slug == slug)
}
