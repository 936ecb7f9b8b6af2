//! Garment Engine
//!
//! Divides an estate among claimants whose claims exceed it, using the classic
//! rules from the bankruptcy literature, with exact rational arithmetic.
//!
//! The engine provides:
//! - A threshold solver shared by every capped rule
//! - Proportional, CEA, CEL and Talmud (contested garment) rules
//! - Over-estate policy handling (cap, warn or reject)
//! - Concede-and-divide and bilateral consistency checks
//! - Dual rules and axiomatic property checks
//! - The bankruptcy problem as a cooperative game
//!
//! # Examples
//!
//! ```
//! use garment_domain::{ClaimSet, Rule};
//! use garment_engine::{Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig::default());
//! let claims = ClaimSet::from_integers(&[100, 200, 300], 100).unwrap();
//!
//! for (rule, allocation) in engine.compare(&claims).unwrap() {
//!     assert_eq!(allocation.total(), *claims.estate(), "{}", rule);
//! }
//! assert!(engine.divide(&claims, Rule::Talmud).is_ok());
//! ```

#![warn(missing_docs)]

mod config;
mod dual;
mod engine;
mod error;
mod traits;

pub mod consistency;
pub mod game;
pub mod properties;
pub mod rules;
pub mod threshold;

pub use config::{EngineConfig, OverEstatePolicy, DEFAULT_MAX_DENOMINATOR};
pub use dual::Dual;
pub use engine::Engine;
pub use error::{ConfigError, DomainError, EngineError, GameError};
pub use game::{BankruptcyGame, Coalition, MAX_PLAYERS};
pub use properties::PropertyViolation;
pub use traits::DivisionRule;
