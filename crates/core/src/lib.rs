//! Core types for the auto-reply twin
//!
//! This crate provides foundational types used across all other crates:
//! - Persona configuration and tone presets (with their fixed templates)
//! - Intent and time-slot labels with their keyword tables
//! - Conversation messages
//! - Reply request/result shapes and the status summary
//! - Error types

pub mod conversation;
pub mod error;
pub mod persona;
pub mod reply;
pub mod signals;

pub use conversation::{Author, ConversationMessage};
pub use error::{Error, Result};
pub use persona::{PersonaConfig, TonePreset, ToneTemplate};
pub use reply::{ReplyMeta, ReplyRequest, ReplyResult, StatusSummary};
pub use signals::{Intent, TimeSlot};
