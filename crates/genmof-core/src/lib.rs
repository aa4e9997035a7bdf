//! GenMOF core - design requests and mock MOF candidate generation.
//!
//! 1. Collect a design brief plus metal / topology / pore-size hints
//! 2. Validate it (`DesignRequest::validate`)
//! 3. Turn it into candidate frameworks (`CandidateGenerator`)
//! 4. Track literature attached to the session (`ArticleStore`)

pub mod request;
pub mod generator;
pub mod articles;

pub use articles::{ArticleInfo, ArticleStore};
pub use generator::{Candidate, CandidateGenerator, DemoGenerator};
pub use request::{DesignRequest, Metal, Topology};
