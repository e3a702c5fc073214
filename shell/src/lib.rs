pub mod audio;
pub mod input;
pub mod leaderboard;
pub mod scheduler;
