//! Tag enums and their display metadata.
//!
//! All enums serialize as `SCREAMING_SNAKE_CASE`, the form the ticketing API
//! uses. Each one carries an `Unknown` variant that absorbs any tag the client
//! does not recognize, so a new backend value never breaks a whole listing.
//! `Unknown` is never accepted from user input (see [`FromStr`] impls).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Display metadata
// ---------------------------------------------------------------------------

/// Terminal color used when rendering a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Green,
    Yellow,
    Red,
    Blue,
    Cyan,
    Magenta,
    Gray,
}

impl Color {
    /// ANSI SGR foreground code.
    #[must_use]
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Green => "32",
            Self::Yellow => "33",
            Self::Red => "31",
            Self::Blue => "34",
            Self::Cyan => "36",
            Self::Magenta => "35",
            Self::Gray => "90",
        }
    }
}

/// Human-facing rendering of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    pub label: &'static str,
    pub color: Color,
}

/// Descriptor used for any tag the client does not recognize.
pub const UNKNOWN_DESCRIPTOR: Descriptor = Descriptor {
    label: "Unknown",
    color: Color::Gray,
};

/// Match `raw` against the canonical names in `known`.
///
/// Accepts any case and `-` in place of `_`.
fn parse_tag<T>(
    raw: &str,
    field: &str,
    known: &[T],
    name: fn(T) -> &'static str,
) -> Result<T, CoreError>
where
    T: Copy,
{
    let normalized = raw.trim().replace('-', "_").to_ascii_uppercase();
    known
        .iter()
        .copied()
        .find(|candidate| name(*candidate) == normalized)
        .ok_or_else(|| {
            let expected = known.iter().map(|k| name(*k)).collect::<Vec<_>>().join(", ");
            CoreError::Validation(format!("invalid {field} '{raw}': expected one of {expected}"))
        })
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of a user within the ticketing workflow.
///
/// `User` is the requester role: the person who opens and later verifies a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[serde(alias = "REQUESTER")]
    User,
    Manager,
    Resolver,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Roles that may be assigned through the API.
    pub const ALL: [Self; 4] = [Self::User, Self::Manager, Self::Resolver, Self::Admin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Manager => "MANAGER",
            Self::Resolver => "RESOLVER",
            Self::Admin => "ADMIN",
            Self::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub const fn descriptor(self) -> Descriptor {
        match self {
            Self::User => Descriptor {
                label: "Requester",
                color: Color::Blue,
            },
            Self::Manager => Descriptor {
                label: "Manager",
                color: Color::Magenta,
            },
            Self::Resolver => Descriptor {
                label: "Resolver",
                color: Color::Cyan,
            },
            Self::Admin => Descriptor {
                label: "Administrator",
                color: Color::Red,
            },
            Self::Unknown => UNKNOWN_DESCRIPTOR,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("requester") {
            return Ok(Self::User);
        }
        parse_tag(s, "role", &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// TicketStatus
// ---------------------------------------------------------------------------

/// Workflow state of a ticket.
///
/// ```text
/// open → assigned → resolved → verified → closed
/// ```
///
/// `RESOLVED_BY_RESOLVER` and `VERIFIED_BY_USER` are accepted as aliases of
/// `RESOLVED` and `VERIFIED`; serialization always emits the short form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    Assigned,
    #[serde(alias = "RESOLVED_BY_RESOLVER")]
    Resolved,
    #[serde(alias = "VERIFIED_BY_USER")]
    Verified,
    Closed,
    #[serde(other)]
    Unknown,
}

impl TicketStatus {
    pub const ALL: [Self; 5] = [
        Self::Open,
        Self::Assigned,
        Self::Resolved,
        Self::Verified,
        Self::Closed,
    ];

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::Assigned],
            Self::Assigned => &[Self::Resolved],
            Self::Resolved => &[Self::Verified],
            Self::Verified => &[Self::Closed],
            Self::Closed | Self::Unknown => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Assigned => "ASSIGNED",
            Self::Resolved => "RESOLVED",
            Self::Verified => "VERIFIED",
            Self::Closed => "CLOSED",
            Self::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub const fn descriptor(self) -> Descriptor {
        match self {
            Self::Open => Descriptor {
                label: "Open",
                color: Color::Blue,
            },
            Self::Assigned => Descriptor {
                label: "Assigned",
                color: Color::Yellow,
            },
            Self::Resolved => Descriptor {
                label: "Resolved",
                color: Color::Cyan,
            },
            Self::Verified => Descriptor {
                label: "Verified",
                color: Color::Green,
            },
            Self::Closed => Descriptor {
                label: "Closed",
                color: Color::Gray,
            },
            Self::Unknown => UNKNOWN_DESCRIPTOR,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('-', "_").to_ascii_uppercase().as_str() {
            "RESOLVED_BY_RESOLVER" => Ok(Self::Resolved),
            "VERIFIED_BY_USER" => Ok(Self::Verified),
            _ => parse_tag(s, "status", &Self::ALL, Self::as_str),
        }
    }
}

// ---------------------------------------------------------------------------
// TicketType
// ---------------------------------------------------------------------------

/// Classification of a ticket, set by a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Bug,
    Feature,
    Support,
    Incident,
    #[serde(other)]
    Unknown,
}

impl TicketType {
    pub const ALL: [Self; 4] = [Self::Bug, Self::Feature, Self::Support, Self::Incident];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "BUG",
            Self::Feature => "FEATURE",
            Self::Support => "SUPPORT",
            Self::Incident => "INCIDENT",
            Self::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub const fn descriptor(self) -> Descriptor {
        match self {
            Self::Bug => Descriptor {
                label: "Bug",
                color: Color::Red,
            },
            Self::Feature => Descriptor {
                label: "Feature request",
                color: Color::Blue,
            },
            Self::Support => Descriptor {
                label: "Support",
                color: Color::Cyan,
            },
            Self::Incident => Descriptor {
                label: "Incident",
                color: Color::Magenta,
            },
            Self::Unknown => UNKNOWN_DESCRIPTOR,
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag(s, "type", &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of a ticket, set by a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub const fn descriptor(self) -> Descriptor {
        match self {
            Self::Low => Descriptor {
                label: "Low",
                color: Color::Green,
            },
            Self::Medium => Descriptor {
                label: "Medium",
                color: Color::Yellow,
            },
            Self::High => Descriptor {
                label: "High",
                color: Color::Red,
            },
            Self::Critical => Descriptor {
                label: "Critical",
                color: Color::Magenta,
            },
            Self::Unknown => UNKNOWN_DESCRIPTOR,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag(s, "priority", &Self::ALL, Self::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_aliases_deserialize_to_canonical_form() {
        let resolved: TicketStatus = serde_json::from_str("\"RESOLVED_BY_RESOLVER\"").unwrap();
        let verified: TicketStatus = serde_json::from_str("\"VERIFIED_BY_USER\"").unwrap();
        assert_eq!(resolved, TicketStatus::Resolved);
        assert_eq!(verified, TicketStatus::Verified);
        assert_eq!(serde_json::to_string(&resolved).unwrap(), "\"RESOLVED\"");
    }

    #[test]
    fn unrecognized_tags_fall_back_to_unknown() {
        let status: TicketStatus = serde_json::from_str("\"ESCALATED\"").unwrap();
        let role: Role = serde_json::from_str("\"AUDITOR\"").unwrap();
        let priority: Priority = serde_json::from_str("\"URGENT\"").unwrap();
        assert_eq!(status, TicketStatus::Unknown);
        assert_eq!(role, Role::Unknown);
        assert_eq!(priority, Priority::Unknown);
        assert_eq!(status.descriptor(), UNKNOWN_DESCRIPTOR);
    }

    #[test]
    fn status_order_is_strict() {
        assert!(TicketStatus::Open.can_transition_to(TicketStatus::Assigned));
        assert!(!TicketStatus::Open.can_transition_to(TicketStatus::Resolved));
        assert!(!TicketStatus::Assigned.can_transition_to(TicketStatus::Open));
        assert!(TicketStatus::Verified.can_transition_to(TicketStatus::Closed));
        assert!(TicketStatus::Closed.allowed_next_states().is_empty());
        assert!(TicketStatus::Unknown.allowed_next_states().is_empty());
    }

    #[test]
    fn from_str_accepts_loose_input() {
        assert_eq!("manager".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!("requester".parse::<Role>().unwrap(), Role::User);
        assert_eq!("resolved-by-resolver".parse::<TicketStatus>().unwrap(), TicketStatus::Resolved);
        assert_eq!(" high ".parse::<Priority>().unwrap(), Priority::High);
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "unknown".parse::<TicketType>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("invalid type 'unknown'"));
        assert!("superuser".parse::<Role>().is_err());
    }
}
