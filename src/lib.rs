//! GPT Relay Bot Library
//!
//! A Discord bot that answers `!gpt <question>` with an OpenAI completion.
//!
//! This crate provides the core functionality for:
//! - Loading credentials and the fixed bot settings
//! - Parsing `!gpt` and `!help` commands
//! - Relaying prompts to the OpenAI chat-completions API
//! - Connecting to Discord and replying in the originating channel

pub mod commands;
pub mod completion;
pub mod config;
pub mod discord;
