//! Heuristic detection of pasted source code inside chat text
//!
//! Chat messages frequently mix prose with pasted code and no fences. This
//! crate partitions such a message into alternating plain-text and code
//! sections so a caller can reformat it, e.g. by wrapping the code sections
//! in Markdown fences tagged with the winning language.
//!
//! # Architecture
//!
//! Detection runs as a three-stage pipeline per language profile:
//! - **Line classifier**: per-line strict and weak heuristics with
//!   hysteresis, so a code run continues more easily than it starts
//! - **Section builder**: groups consecutive same-classification lines and
//!   migrates trailing blank lines out of code sections
//! - **Merger and promoter**: smooths away sections below the minimum run
//!   length, then promotes multi-line constructs (triple-quoted strings)
//!   that no single line reveals
//!
//! A selector runs every registered profile over the input and keeps the
//! result with the most probable, then total, lines of code.
//!
//! # Example
//!
//! ```rust
//! let text = "hey can someone help\nmy script keeps crashing\ndef add(a, b):\n    return a + b\nprint(add(1, 2))\nthanks in advance\nsee the error above";
//!
//! let result = codefence_core::detect(text).expect("snippet contains code");
//! assert_eq!(result.language(), "python");
//! assert_eq!(result.debug(), "2p 3c 2p");
//! assert!(result.sections()[1].is_code());
//! ```

mod builder;
mod detector;
mod error;
mod merger;
mod promoter;
mod section;

pub mod language;

pub use detector::{detect, CodeDetector, LanguageDetector};
pub use error::{Error, Result};
pub use language::{LanguageProfile, PythonProfile, Thresholds, ThresholdsBuilder};
pub use section::{Classification, DetectedSection, DetectionResult};
