//! Dashboard API service.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 API SERVICE                   │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐    ┌──────────────────────────┐ │
//!   ─────────────────┼─▶│  http   │───▶│  handlers                 │ │
//!                    │  │ server  │    │  /health[/db|/redis]      │ │
//!                    │  └─────────┘    │  /api/v1 surface          │ │
//!                    │                 └───────────┬───────────────┘ │
//!                    │                             │                 │
//!                    │                             ▼                 │
//!                    │                 ┌──────────────────────────┐ │
//!                    │                 │  health engine            │ │
//!                    │                 │  target → runner → report │ │
//!                    │                 └───────┬───────────┬──────┘ │
//!                    │                         │           │        │
//!                    │                         ▼           ▼        │
//!                    │                  PostgreSQL       Redis      │
//!                    │                  (SELECT 1)       (PING)     │
//!                    │                                               │
//!                    │  ┌────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns         │  │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌────────┐ │  │
//!                    │  │  │ config │ │observability│ │lifecycle│ │  │
//!                    │  │  └────────┘ └─────────────┘ └────────┘ │  │
//!                    │  └────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod health;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
