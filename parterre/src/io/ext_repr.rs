use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::ShapeKind;

/// External representation of a [`Shape`](crate::geometry::Shape):
/// its kind and a map of named lengths, see [`ShapeKind::required_params`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtShape {
    pub kind: ShapeKind,
    pub parameters: HashMap<String, f64>,
}

/// External representation of an [`ItemKind`](crate::entities::ItemKind), as supplied by the inventory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItemKind {
    pub category: String,
    pub variety_id: u64,
    pub variety_name: String,
    pub clearance_radius: f64,
    pub quantity: usize,
}

/// External representation of an [`Instance`](crate::entities::Instance)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// Name of the instance
    pub name: String,
    /// Domain in which the items have to be placed
    pub domain: ExtShape,
    /// Requested items
    pub items: Vec<ExtItemKind>,
}

/// External representation of a placed item
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedItem {
    pub x: f64,
    pub y: f64,
    pub clearance_radius: f64,
    pub category: String,
    pub variety_id: u64,
    pub variety_name: String,
}

/// External representation of a [`Candidate`](crate::entities::Candidate)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    pub items: Vec<ExtPlacedItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness: Option<f64>,
}
