// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                 main.rs
//!                    |
//!          +---------+---------+
//!          v                   v
//!     cli (clap)         cmd (handlers)
//!                              |
//!                              v
//!   ,-----------------------------------------,
//!   |  validate    validate() / envoy()       |
//!   |              --> Config | EnvoyError     |
//!   '-----+-------------------------+---------'
//!         |                         |
//!         v                         v
//!      schema                      env
//!   Field<T>, FieldSpec,      Env snapshot,
//!   Schema, TOML documents    EnvSource
//!         |
//!         v
//!      parse   string / number / boolean / enum
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use envoy_rs::env::Env;
//! use envoy_rs::schema::{boolean, enum_type, number, string};
//! use envoy_rs::{schema, validate};
//!
//! let env = Env::new()
//!     .with("PORT", "3000")
//!     .with("NODE_ENV", "production")
//!     .with("DEBUG", "true")
//!     .with("API_URL", "https://api.example.com");
//!
//! let config = validate(
//!     &schema! {
//!         PORT: number(),
//!         NODE_ENV: enum_type(["development", "production", "test"]),
//!         DEBUG: boolean(),
//!         API_URL: string(),
//!     },
//!     &env,
//! )
//! .expect("valid environment");
//!
//! assert_eq!(config.number("PORT"), Some(3000.0));
//! assert_eq!(config.string("NODE_ENV"), Some("production"));
//! assert_eq!(config.boolean("DEBUG"), Some(true));
//! ```

pub mod cli;
pub mod cmd;
pub mod env;
pub mod error;
pub mod logging;
pub mod parse;
pub mod schema;
pub mod validate;

pub use error::EnvoyError;
pub use validate::{Config, envoy, validate};
