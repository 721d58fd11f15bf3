use crate::pagesize::{self, PageSize};
use crate::units::{In, Pt};
use crate::BadgeError;
use serde::{Deserialize, Serialize};

/// The physical template a badge is laid out on. All values are in points;
/// vertical positions measured from the bottom edge are PDF coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeGeometry {
    pub width: Pt,
    pub height: Pt,
    /// Left and right margin for company, title and ticket type
    pub side_margin: Pt,
    /// Left and right margin for the name
    pub name_side_margin: Pt,
    /// Distance from the top edge down to the first name baseline
    pub content_top: Pt,
    /// Baseline of the ticket type, from the bottom edge
    pub ticket_type_y: Pt,
    /// Space kept clear between the lowest content baseline and the ticket type
    pub ticket_gap: Pt,
}

impl Default for BadgeGeometry {
    fn default() -> Self {
        let (width, height) = pagesize::BADGE;
        BadgeGeometry {
            width,
            height,
            side_margin: In(0.3).into(),
            name_side_margin: In(0.25).into(),
            content_top: In(2.0).into(),
            ticket_type_y: In(1.25).into(),
            ticket_gap: In(0.45).into(),
        }
    }
}

impl BadgeGeometry {
    pub fn page_size(&self) -> PageSize {
        (self.width, self.height)
    }

    pub fn center_x(&self) -> Pt {
        self.width / 2.0
    }

    /// Widest a company, title or ticket-type line may be
    pub fn max_text_width(&self) -> Pt {
        self.width - self.side_margin * 2.0
    }

    /// Widest a name line may be
    pub fn name_max_width(&self) -> Pt {
        self.width - self.name_side_margin * 2.0
    }

    /// Baseline of the first name line
    pub fn content_top_y(&self) -> Pt {
        self.height - self.content_top
    }

    /// Vertical room for the name, company and title blocks
    pub fn available_height(&self) -> Pt {
        self.content_top_y() - self.ticket_type_y - self.ticket_gap
    }

    /// Check that the constants describe a badge anything can be printed on
    pub fn validate(&self) -> Result<(), BadgeError> {
        let values = [
            ("width", self.width),
            ("height", self.height),
            ("side_margin", self.side_margin),
            ("name_side_margin", self.name_side_margin),
            ("content_top", self.content_top),
            ("ticket_type_y", self.ticket_type_y),
            ("ticket_gap", self.ticket_gap),
        ];
        if let Some((field, value)) = values
            .iter()
            .find(|(_, value)| !value.is_finite() || **value < 0.0)
        {
            return Err(BadgeError::InvalidGeometry(format!(
                "{field} must be a finite, non-negative length, got {value}"
            )));
        }

        if *self.width <= 0.0 || *self.height <= 0.0 {
            return Err(BadgeError::InvalidGeometry(
                "the badge must have a positive width and height".to_string(),
            ));
        }
        if *self.max_text_width() <= 0.0 || *self.name_max_width() <= 0.0 {
            return Err(BadgeError::InvalidGeometry(
                "side margins leave no room for text".to_string(),
            ));
        }
        if self.content_top >= self.height {
            return Err(BadgeError::InvalidGeometry(
                "content_top lies below the bottom edge".to_string(),
            ));
        }
        if self.ticket_type_y >= self.content_top_y() {
            return Err(BadgeError::InvalidGeometry(
                "the ticket type sits above the start of the content".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_badge_is_4_15_by_5_7_inches() {
        let geometry = BadgeGeometry::default();
        assert!((In::from(geometry.width).0 - 4.15).abs() < 1e-4);
        assert!((In::from(geometry.height).0 - 5.7).abs() < 1e-4);
        assert!((In::from(geometry.max_text_width()).0 - 3.55).abs() < 1e-4);
        assert!((In::from(geometry.name_max_width()).0 - 3.65).abs() < 1e-4);
        assert!((In::from(geometry.available_height()).0 - 2.0).abs() < 1e-4);
        assert!(geometry.validate().is_ok());
    }

    #[test]
    fn margins_wider_than_the_badge_are_rejected() {
        let geometry = BadgeGeometry {
            side_margin: In(3.0).into(),
            ..BadgeGeometry::default()
        };
        assert!(matches!(
            geometry.validate(),
            Err(BadgeError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn negative_and_nan_lengths_are_rejected() {
        let negative = BadgeGeometry {
            ticket_gap: Pt(-1.0),
            ..BadgeGeometry::default()
        };
        assert!(negative.validate().is_err());

        let nan = BadgeGeometry {
            height: Pt(f32::NAN),
            ..BadgeGeometry::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn inverted_anchors_are_rejected() {
        let geometry = BadgeGeometry {
            ticket_type_y: In(5.0).into(),
            ..BadgeGeometry::default()
        };
        assert!(geometry.validate().is_err());
    }

    #[test]
    fn partial_geometry_fills_in_defaults() {
        let geometry: BadgeGeometry = toml::from_str("ticket_gap = 20.0").expect("parses");
        assert_eq!(geometry.ticket_gap, Pt(20.0));
        assert_eq!(geometry.width, BadgeGeometry::default().width);
    }
}
