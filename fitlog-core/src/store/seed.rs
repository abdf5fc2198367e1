//! Default workout library written on first setup.

use crate::types::{Difficulty, Exercise, Workout};

fn exercise(name: &str, duration_secs: u32, rest_secs: u32) -> Exercise {
    Exercise::timed(name, duration_secs, rest_secs)
}

/// The built-in workout library.
pub fn default_workouts() -> Vec<Workout> {
    vec![
        Workout {
            id: "full-body-strength".to_string(),
            name: "Full Body Strength".to_string(),
            description: "Bodyweight strength circuit for every major muscle group".to_string(),
            category: "strength".to_string(),
            difficulty: Difficulty::Intermediate,
            duration: 30,
            exercises: vec![
                exercise("Squats", 45, 15),
                exercise("Push-ups", 45, 15),
                exercise("Lunges", 45, 15),
                exercise("Plank", 60, 15),
                exercise("Glute Bridges", 45, 15),
                exercise("Tricep Dips", 45, 15),
            ],
            is_custom: false,
            created_at: None,
        },
        Workout {
            id: "morning-hiit".to_string(),
            name: "Morning HIIT".to_string(),
            description: "Short, intense intervals to start the day".to_string(),
            category: "hiit".to_string(),
            difficulty: Difficulty::Advanced,
            duration: 20,
            exercises: vec![
                exercise("Jumping Jacks", 40, 20),
                exercise("Burpees", 40, 20),
                exercise("Mountain Climbers", 40, 20),
                exercise("High Knees", 40, 20),
                exercise("Jump Squats", 40, 20),
            ],
            is_custom: false,
            created_at: None,
        },
        Workout {
            id: "cardio-blast".to_string(),
            name: "Cardio Blast".to_string(),
            description: "Steady cardio to build endurance".to_string(),
            category: "cardio".to_string(),
            difficulty: Difficulty::Beginner,
            duration: 25,
            exercises: vec![
                exercise("Marching in Place", 120, 30),
                exercise("Step Touch", 120, 30),
                exercise("Butt Kicks", 90, 30),
                exercise("Skaters", 90, 30),
            ],
            is_custom: false,
            created_at: None,
        },
        Workout {
            id: "evening-stretch".to_string(),
            name: "Evening Stretch".to_string(),
            description: "Gentle mobility and stretching to wind down".to_string(),
            category: "flexibility".to_string(),
            difficulty: Difficulty::Beginner,
            duration: 15,
            exercises: vec![
                exercise("Neck Rolls", 60, 0),
                exercise("Cat-Cow", 60, 0),
                exercise("Hamstring Stretch", 90, 0),
                exercise("Child's Pose", 90, 0),
                exercise("Hip Flexor Stretch", 90, 0),
            ],
            is_custom: false,
            created_at: None,
        },
        Workout {
            id: "core-crusher".to_string(),
            name: "Core Crusher".to_string(),
            description: "Focused core work".to_string(),
            category: "strength".to_string(),
            difficulty: Difficulty::Intermediate,
            duration: 15,
            exercises: vec![
                exercise("Crunches", 45, 15),
                exercise("Russian Twists", 45, 15),
                exercise("Leg Raises", 45, 15),
                exercise("Side Plank", 60, 15),
            ],
            is_custom: false,
            created_at: None,
        },
    ]
}
