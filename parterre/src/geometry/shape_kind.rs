use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// The seven supported domain shapes, as named in instance descriptors.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
    Ellipse,
    RightTriangle,
    Frame,
    Annulus,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Ellipse,
        ShapeKind::RightTriangle,
        ShapeKind::Frame,
        ShapeKind::Annulus,
    ];

    /// Names of the parameters required to build a shape of this kind, in constructor order.
    pub fn required_params(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::Circle => &["radius"],
            ShapeKind::Square => &["side"],
            ShapeKind::Rectangle => &["width", "height"],
            ShapeKind::Ellipse => &["semi-width", "semi-height"],
            ShapeKind::RightTriangle => &["base", "height"],
            ShapeKind::Frame => &["innerWidth", "innerHeight", "outerWidth", "outerHeight"],
            ShapeKind::Annulus => &["innerRadius", "outerRadius"],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::RightTriangle => "right-triangle",
            ShapeKind::Frame => "frame",
            ShapeKind::Annulus => "annulus",
        }
    }
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| InputError::UnknownShapeKind(s.to_string()))
    }
}
