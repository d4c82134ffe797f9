//! Activities available when the process starts

use crate::types::{Activity, ActivityMap};

/// Build the startup set of activities with their initial participants.
pub fn initial_activities() -> ActivityMap {
    [
        (
            "Art Studio",
            Activity::new(
                "Explore painting, drawing, and other visual arts",
                "Wednesdays, 3:30 PM - 5:00 PM",
                16,
            )
            .with_participants(["maya@mergington.edu"]),
        ),
        (
            "Basketball",
            Activity::new(
                "Team sport focusing on basketball skills and competitive play",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["alex@mergington.edu"]),
        ),
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop argumentation and public speaking skills",
                "Mondays and Fridays, 3:30 PM - 4:30 PM",
                14,
            )
            .with_participants(["lucas@mergington.edu", "ava@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Music Ensemble",
            Activity::new(
                "Play instruments and perform in group concerts",
                "Thursdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["james@mergington.edu", "hannah@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Robotics Club",
            Activity::new(
                "Design and build robots for competitions",
                "Saturdays, 10:00 AM - 12:00 PM",
                18,
            )
            .with_participants(["david@mergington.edu"]),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}
