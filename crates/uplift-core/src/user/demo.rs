use super::model::{Campus, User};

/// The profile assigned by the demo login, regardless of credentials.
pub fn demo_user() -> User {
    User {
        id: "user1".to_string(),
        name: "Thabo Mokoena".to_string(),
        email: "thabo.mokoena@student.nwu.ac.za".to_string(),
        student_number: "32145678".to_string(),
        faculty: "Faculty of Engineering".to_string(),
        year_of_study: 3,
        campus: Campus::Potchefstroom,
        profile_image: Some(
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d".to_string(),
        ),
    }
}
