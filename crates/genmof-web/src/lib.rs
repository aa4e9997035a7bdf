//! genmof-web — Web front-end for GenMOF Studio
//! Provides a single playground page with:
//!   - Design brief form (metal / topology / pore-size hints)
//!   - Mock candidate cards and JSON export
//!   - Per-session literature uploads

pub mod router;
pub mod handlers;
pub mod state;
pub mod session;
pub mod html;
