//! # Tweetnorm
//!
//! Normalization of social-media posts into clean token sequences for
//! sentiment analysis.
//!
//! ## Features
//!
//! - Noise removal (URLs, mentions, hashtags, punctuation, emoji)
//! - English tokenization with contraction splitting
//! - Case-insensitive stop-word removal
//! - Negation fusion (`not good` → `NEG_good`)
//! - Context-aware lemmatization
//! - Order-preserving parallel batch runs
//!
//! ```
//! use tweetnorm::pipeline::{Pipeline, Record};
//!
//! let pipeline = Pipeline::english().unwrap();
//! let output = pipeline.run(vec![Some("Cats are running!! @bob".to_string()), None]);
//!
//! assert_eq!(output[0], Record::from(vec!["cat".to_string(), "run".to_string()]));
//! assert_eq!(output[1], Record::Missing);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod pipeline;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
