use crate::badge::BadgeRequest;
use crate::BadgeError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A request to print one attendee's badge
///
/// ```
/// use badge_print::TicketPayload;
///
/// let ticket: TicketPayload = serde_json::from_str(
///     r#"{"ticket_id":"A1-0245","name":"Fazli","company":"Fazli Corp.","title":"CEO"}"#,
/// ).unwrap();
/// assert_eq!(ticket.badge.ticket_type, "Delegate");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPayload {
    /// Identifies the ticket; only used to name the generated file
    pub ticket_id: String,
    #[serde(flatten)]
    pub badge: BadgeRequest,
}

impl TicketPayload {
    pub fn validate(&self) -> Result<(), BadgeError> {
        if self.ticket_id.trim().is_empty() {
            return Err(BadgeError::MissingField("ticket_id"));
        }
        self.badge.validate()
    }

    /// File name for this ticket's badge rendered at `at`
    pub fn file_name(&self, at: DateTime<Local>) -> String {
        format!(
            "badge-{}-{}.pdf",
            sanitize_id(&self.ticket_id),
            at.format("%Y%m%d-%H%M%S")
        )
    }
}

/// Make a ticket id safe to use in a file name: anything other than ASCII
/// letters, digits, `-` and `_` becomes `_`
pub fn sanitize_id(id: &str) -> String {
    let sanitized: String = id
        .trim()
        .chars()
        .map(|ch| match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => ch,
            _ => '_',
        })
        .collect();

    if sanitized.is_empty() {
        "ticket".to_string()
    } else {
        sanitized
    }
}

/// A badge used to preview the layout without printing
#[derive(Debug, Clone)]
pub struct SampleTicket {
    pub file_name: &'static str,
    pub description: &'static str,
    pub ticket: TicketPayload,
}

fn sample(
    file_name: &'static str,
    description: &'static str,
    ticket_id: &str,
    badge: BadgeRequest,
) -> SampleTicket {
    SampleTicket {
        file_name,
        description,
        ticket: TicketPayload {
            ticket_id: ticket_id.to_string(),
            badge,
        },
    }
}

/// Badges covering the range of text lengths the layout has to cope with,
/// longest first
pub fn sample_tickets() -> Vec<SampleTicket> {
    vec![
        sample(
            "preview_extreme_long.pdf",
            "EXTREME - all very long text",
            "TEST-001",
            BadgeRequest::new(
                "Associate Professor Dr. Chin Pei Yee",
                "UMS INDUSTRY & COMMUNITY NETWORK",
                "DEPUTY DIRECTOR, CENTRE FOR INDUSTRIAL COLLABORATION AND ENGAGEMENT",
                "VIP",
            ),
        ),
        sample(
            "preview_long.pdf",
            "LONG - realistic long text",
            "TEST-002",
            BadgeRequest::new(
                "Rosnih Binti Othman",
                "SABAH MAJU JAYA SEKRETARIAT",
                "PENGARAH SEKRETARIAT SABAH MAJU JAYA, JABATAN KETUA MENTERI SABAH",
                "VIP",
            ),
        ),
        sample(
            "preview_medium.pdf",
            "MEDIUM - moderate length",
            "TEST-003",
            BadgeRequest::new(
                "Andy Lee Chen Hiung",
                "UMS Faculty of Business Economics and Accountancy",
                "Director of Accounting Centre",
                "INVITED DELEGATE",
            ),
        ),
        sample(
            "preview_short.pdf",
            "SHORT - normal length",
            "TEST-004",
            BadgeRequest::new("Fiona Tan", "Jesselton Pixel", "Software Engineer", "Delegate"),
        ),
    ]
}
