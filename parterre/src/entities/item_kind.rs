use crate::error::{InputError, InputResult, ensure_positive};

/// A kind of item requested by the manifest: which variety, how much clearance it needs and how many of them.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemKind {
    /// Index of this kind in its [`Manifest`](crate::entities::Manifest)
    pub id: usize,
    pub category: String,
    pub variety_id: u64,
    pub variety_name: String,
    /// Minimum clearance radius around the item's center
    pub clearance_radius: f64,
    /// Number of items of this kind to place
    pub quantity: usize,
}

impl ItemKind {
    pub fn try_new(
        id: usize,
        category: impl Into<String>,
        variety_id: u64,
        variety_name: impl Into<String>,
        clearance_radius: f64,
        quantity: usize,
    ) -> InputResult<Self> {
        let category = category.into();
        let variety_name = variety_name.into();
        if category.trim().is_empty() {
            return Err(InputError::Constraint(format!(
                "item kind {id} has an empty category"
            )));
        }
        if variety_name.trim().is_empty() {
            return Err(InputError::Constraint(format!(
                "item kind {id} ({category}) has an empty variety name"
            )));
        }
        ensure_positive("clearance radius", clearance_radius)?;

        Ok(Self {
            id,
            category,
            variety_id,
            variety_name,
            clearance_radius,
            quantity,
        })
    }
}
