//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for a specific set of backend
//! endpoints.
//!
//! ## Mapping to the pauta backend
//!
//! | Module | Backend routes | Description |
//! |--------|---------------|-------------|
//! | `agenda` | `/bi/eixos/`, `/bi/temas/`, `/bi/proposicoes/` | Read-only Power BI collections |
//! | `health` | `/health/` | Backend liveness probe |

pub mod agenda;
pub mod health;

pub use agenda::AgendaApi;
pub use health::HealthApi;
