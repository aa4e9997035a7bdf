//! Mock candidate generation.
//!
//! `DemoGenerator` stands in for a real generative model: it derives a short,
//! deterministic list of candidates from the request's hints by cycling fixed
//! lookup tables. The brief text itself never influences the output.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::request::{DesignRequest, Metal, Topology, DEFAULT_PORE_SIZE};

/// Metals used, in order, when the request leaves the metal center on Auto.
pub const AUTO_METALS: [Metal; 3] = [Metal::Zn, Metal::Cu, Metal::Zr];

pub const LINKERS: [&str; 3] = [
    "terephthalate",
    "bipyridyl + dicarboxylate",
    "UiO-type dicarboxylate",
];

pub const TAGLINES: [&str; 3] = [
    "Adsorption-oriented candidate inspired by classical carboxylate MOFs.",
    "Pillared-layer framework balancing surface area and water tolerance.",
    "High-stability node with tunable functional groups for selectivity.",
];

/// A generated framework as shown on a result card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub metal: String,
    pub topology: String,
    pub pore_size: f64,
    pub linker: String,
    pub tagline: String,
}

/// Anything that can turn a validated request into candidates.
pub trait CandidateGenerator: Send + Sync {
    fn name(&self) -> &str;

    /// Callers must reject blank briefs before calling this.
    fn generate(&self, request: &DesignRequest) -> Vec<Candidate>;
}

/// Deterministic lookup-table generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoGenerator;

impl DemoGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CandidateGenerator for DemoGenerator {
    fn name(&self) -> &str {
        "demo"
    }

    fn generate(&self, request: &DesignRequest) -> Vec<Candidate> {
        let candidates = generate_candidates(
            request.metal,
            request.topology,
            request.pore_size,
            request.candidate_count,
        );
        debug!(
            "Generated {} candidates (metal={}, topology={}, pore={})",
            candidates.len(),
            request.metal,
            request.topology,
            request.pore_size
        );
        candidates
    }
}

/// Build `count` candidates. Total over its inputs: `count == 0` yields an
/// empty list and a pore size of exactly 0.0 falls back to the 12.0 default.
pub fn generate_candidates(
    metal: Metal,
    topology: Topology,
    pore_size: f64,
    count: usize,
) -> Vec<Candidate> {
    let roster = metal_roster(metal);
    let topology = topology.resolve();
    let base = if pore_size != 0.0 { pore_size } else { DEFAULT_PORE_SIZE };

    (0..count)
        .map(|i| {
            let metal = roster[i % roster.len()].as_str();
            // Centered on the second candidate; not clamped.
            let offset = (i as f64 - 1.0) * 2.0;
            Candidate {
                name: format!("{}-GenMOF-{}", metal, i + 1),
                metal: metal.to_string(),
                topology: topology.as_str().to_string(),
                pore_size: round1(base + offset),
                linker: LINKERS[i % LINKERS.len()].to_string(),
                tagline: TAGLINES[i % TAGLINES.len()].to_string(),
            }
        })
        .collect()
}

fn metal_roster(metal: Metal) -> [Metal; 3] {
    match metal {
        Metal::Auto => AUTO_METALS,
        fixed => [fixed; 3],
    }
}

/// One decimal, halves to even.
fn round1(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests;
