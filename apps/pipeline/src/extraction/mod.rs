// Resume intake: PDF bytes -> raw text -> cleaned text -> CandidateProfile.
// The vocabulary is loaded once at startup and shared read-only through
// `ProfileExtractor`; role and experience heuristics are stateless.

pub mod cleaner;
pub mod experience;
pub mod pdf;
pub mod profile;
pub mod role;
pub mod skills;
pub mod vocabulary;
