// Three-factor job matching: skills (50%), role (30%), experience (20%).
// Every scorer is a pure function over one (profile, job) pair; only the
// ranker looks across jobs, and only after all scores exist.

pub mod combine;
pub mod experience_score;
pub mod handlers;
pub mod ranker;
pub mod role_score;
pub mod skill_score;
