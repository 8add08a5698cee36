//! Type definitions for navigator commands and their results
//!
//! Every executed command produces a `CommandResponse`, which the
//! output formatter renders as text or JSON.

use serde::{Deserialize, Serialize};

use crate::session::{HistorySnapshot, PageId};

// =============================================================================
// Command Types
// =============================================================================

/// Unique identifier for a command response
pub type CommandId = String;

/// All supported command types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandType {
    Visit,
    Back,
    Forward,
    Current,
    History,
    Neighbors,
}

/// Result of executing one command against a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub id: CommandId,
    pub command: CommandType,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String, // ISO 8601 format
}

// =============================================================================
// Response Data Types
// =============================================================================

/// Data returned from visit, back, forward and current
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    /// False when back/forward had no history to move through
    pub moved: bool,
    pub current: Option<PageId>,
}

/// Data returned from history command
pub type HistoryData = HistorySnapshot;

/// Data returned from neighbors command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborsData {
    pub url: PageId,
    /// Sorted destinations
    pub neighbors: Vec<PageId>,
}
