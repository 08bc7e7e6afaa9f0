//! RSVP form input and the validated submission record.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Shortest accepted guest name, after trimming.
pub const NAME_MIN_CHARS: usize = 3;
/// Longest accepted guest name.
pub const NAME_MAX_CHARS: usize = 100;
/// Largest accepted head count per field.
pub const COUNT_MAX: u32 = 50;

const MSG_NAME_TOO_SHORT: &str = "Por favor, insira o nome completo";
const MSG_NAME_TOO_LONG: &str = "Nome muito longo";
const MSG_COUNT_INVALID: &str = "Número inválido";
const MSG_COUNT_TOO_HIGH: &str = "Número muito alto";

/// Raw, untrusted form input exactly as read from the page controls.
///
/// The count fields are strings because number inputs hand us text;
/// parsing them is part of validation, not of the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsvpForm {
    pub name: String,
    pub children: String,
    pub adults: String,
}

/// A validated RSVP, immutable once built.
///
/// Serializes to the webhook's wire shape: Portuguese keys and an
/// RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsvpSubmission {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "criancas")]
    pub children: u32,
    #[serde(rename = "adultos")]
    pub adults: u32,
    #[serde(rename = "timestamp")]
    pub submitted_at: DateTime<Utc>,
}

/// Per-field validation messages, surfaced inline next to each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub children: Option<&'static str>,
    pub adults: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.children.is_none() && self.adults.is_none()
    }
}

impl RsvpForm {
    /// Validate the raw input, stamping the submission with `submitted_at`.
    ///
    /// All fields are checked so the guest sees every problem at once
    /// rather than fixing them one by one.
    pub fn validate(&self, submitted_at: DateTime<Utc>) -> Result<RsvpSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        let name_chars = name.chars().count();
        if name_chars < NAME_MIN_CHARS {
            errors.name = Some(MSG_NAME_TOO_SHORT);
        } else if name_chars > NAME_MAX_CHARS {
            errors.name = Some(MSG_NAME_TOO_LONG);
        }

        let children = match parse_count(&self.children) {
            Ok(n) => n,
            Err(msg) => {
                errors.children = Some(msg);
                0
            }
        };
        let adults = match parse_count(&self.adults) {
            Ok(n) => n,
            Err(msg) => {
                errors.adults = Some(msg);
                0
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RsvpSubmission {
            name: name.to_string(),
            children,
            adults,
            submitted_at,
        })
    }
}

/// Parse a head-count field: a non-negative integer no greater than
/// [`COUNT_MAX`]. Anything non-numeric (including empty input) is invalid.
fn parse_count(raw: &str) -> Result<u32, &'static str> {
    let n: i64 = raw.trim().parse().map_err(|_| MSG_COUNT_INVALID)?;
    if n < 0 {
        return Err(MSG_COUNT_INVALID);
    }
    if n > i64::from(COUNT_MAX) {
        return Err(MSG_COUNT_TOO_HIGH);
    }
    Ok(n as u32)
}
