//! Design requests collected from the playground form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use genmof_common::error::{GenmofError, Result};

pub const AUTO: &str = "Auto";

pub const PORE_SIZE_MIN: f64 = 3.0;
pub const PORE_SIZE_MAX: f64 = 30.0;
pub const PORE_SIZE_STEP: f64 = 0.5;
pub const DEFAULT_PORE_SIZE: f64 = 12.0;

pub const CANDIDATE_COUNT_MIN: usize = 1;
pub const CANDIDATE_COUNT_MAX: usize = 5;
pub const DEFAULT_CANDIDATE_COUNT: usize = 3;

pub const DEFAULT_BRIEF: &str = "CO₂ capture from flue gas at ~40 °C and 1 bar; high CO₂ selectivity over N₂; water-tolerant framework.";

/// Preferred metal center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Metal {
    #[default]
    Auto,
    Zn,
    Cu,
    Zr,
    Co,
    Ni,
    #[serde(rename = "Mixed metal")]
    MixedMetal,
}

impl Metal {
    pub const ALL: [Metal; 7] = [
        Metal::Auto,
        Metal::Zn,
        Metal::Cu,
        Metal::Zr,
        Metal::Co,
        Metal::Ni,
        Metal::MixedMetal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metal::Auto => AUTO,
            Metal::Zn => "Zn",
            Metal::Cu => "Cu",
            Metal::Zr => "Zr",
            Metal::Co => "Co",
            Metal::Ni => "Ni",
            Metal::MixedMetal => "Mixed metal",
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metal {
    type Err = GenmofError;

    /// An empty string means "let the generator choose".
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Metal::Auto);
        }
        Metal::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| GenmofError::InvalidRequest(format!("unknown metal center '{s}'")))
    }
}

impl TryFrom<String> for Metal {
    type Error = GenmofError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Topology hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Topology {
    #[default]
    Auto,
    #[serde(rename = "pcu")]
    Pcu,
    #[serde(rename = "fcu")]
    Fcu,
    #[serde(rename = "sql")]
    Sql,
    #[serde(rename = "dia")]
    Dia,
    #[serde(rename = "sql-pillared")]
    SqlPillared,
}

impl Topology {
    pub const ALL: [Topology; 6] = [
        Topology::Auto,
        Topology::Pcu,
        Topology::Fcu,
        Topology::Sql,
        Topology::Dia,
        Topology::SqlPillared,
    ];

    /// What `Auto` resolves to.
    pub const DEFAULT: Topology = Topology::Pcu;

    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Auto => AUTO,
            Topology::Pcu => "pcu",
            Topology::Fcu => "fcu",
            Topology::Sql => "sql",
            Topology::Dia => "dia",
            Topology::SqlPillared => "sql-pillared",
        }
    }

    pub fn resolve(self) -> Topology {
        match self {
            Topology::Auto => Self::DEFAULT,
            other => other,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topology {
    type Err = GenmofError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Topology::Auto);
        }
        Topology::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| GenmofError::InvalidRequest(format!("unknown topology '{s}'")))
    }
}

impl TryFrom<String> for Topology {
    type Error = GenmofError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// One playground submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRequest {
    /// Missing means blank, which `validate` rejects.
    #[serde(default)]
    pub brief: String,
    #[serde(default)]
    pub metal: Metal,
    #[serde(default)]
    pub topology: Topology,
    #[serde(default = "default_pore_size")]
    pub pore_size: f64,
    #[serde(default = "default_candidate_count")]
    pub candidate_count: usize,
}

fn default_pore_size() -> f64 { DEFAULT_PORE_SIZE }
fn default_candidate_count() -> usize { DEFAULT_CANDIDATE_COUNT }

impl Default for DesignRequest {
    fn default() -> Self {
        Self {
            brief: DEFAULT_BRIEF.to_string(),
            metal: Metal::Auto,
            topology: Topology::Auto,
            pore_size: DEFAULT_PORE_SIZE,
            candidate_count: DEFAULT_CANDIDATE_COUNT,
        }
    }
}

impl DesignRequest {
    pub fn has_brief(&self) -> bool {
        !self.brief.trim().is_empty()
    }

    /// Checks that must pass before the request reaches a generator.
    /// A blank brief is reported first.
    pub fn validate(&self) -> Result<()> {
        if !self.has_brief() {
            return Err(GenmofError::EmptyBrief);
        }

        if !self.pore_size.is_finite()
            || !(PORE_SIZE_MIN..=PORE_SIZE_MAX).contains(&self.pore_size)
        {
            return Err(GenmofError::InvalidRequest(format!(
                "pore size must be between {PORE_SIZE_MIN} and {PORE_SIZE_MAX} Å, got {}",
                self.pore_size
            )));
        }
        if ((self.pore_size - PORE_SIZE_MIN) / PORE_SIZE_STEP).fract() != 0.0 {
            return Err(GenmofError::InvalidRequest(format!(
                "pore size must be a multiple of {PORE_SIZE_STEP} Å, got {}",
                self.pore_size
            )));
        }

        if !(CANDIDATE_COUNT_MIN..=CANDIDATE_COUNT_MAX).contains(&self.candidate_count) {
            return Err(GenmofError::InvalidRequest(format!(
                "candidate count must be between {CANDIDATE_COUNT_MIN} and {CANDIDATE_COUNT_MAX}, got {}",
                self.candidate_count
            )));
        }
        Ok(())
    }
}
