//! litlens - research paper analysis from the command line
//!
//! Extracts text from PDF research papers, generates structured
//! literature-review summaries via the Gemini API, answers follow-up
//! questions over a summary, and compares 2-5 papers pairwise. Also defines
//! a fixed-schema Paper Analysis Record with a total markdown renderer.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use litlens::{client::GeminiClient, config::Config, tools};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = GeminiClient::new(config)?;
//!     let ctx = tools::ToolContext::new(Arc::new(client));
//!
//!     let pdf = std::fs::read("paper.pdf")?;
//!     let review = tools::analyze_document(&ctx, &pdf).await?;
//!     println!("{review}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod formatters;
pub mod models;
pub mod prompts;
pub mod session;
pub mod tools;

pub use client::GeminiClient;
pub use config::Config;
pub use error::{ExtractionError, ModelError, ToolError};
pub use models::PaperAnalysis;
pub use session::SessionContext;
