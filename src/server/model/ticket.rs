//! Event tickets.
//!
//! A ticket is the string `"{slack_id}-{event_id}"`, rendered as a QR code on the member's
//! dashboard and scanned by admins at the door. Possession of the string proves nothing by
//! itself; validity is derived from the member's purchase records at verification time.

use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub slack_id: String,
    pub event_id: i32,
}

impl Ticket {
    pub fn new(slack_id: impl Into<String>, event_id: i32) -> Self {
        Self {
            slack_id: slack_id.into(),
            event_id,
        }
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.slack_id, self.event_id)
    }
}

/// Error for a ticket string that is not `"{slack_id}-{event_id}"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTicket;

impl FromStr for Ticket {
    type Err = InvalidTicket;

    /// Splits at the first hyphen; both halves must be non-empty and the event id numeric.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (slack_id, event_id) = s.trim().split_once('-').ok_or(InvalidTicket)?;
        if slack_id.is_empty() || event_id.is_empty() {
            return Err(InvalidTicket);
        }
        let event_id = event_id.parse::<i32>().map_err(|_| InvalidTicket)?;

        Ok(Self::new(slack_id, event_id))
    }
}
