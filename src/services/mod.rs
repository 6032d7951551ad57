pub mod recommendations;
pub mod recommender;
pub mod seeding;
pub mod weather;
