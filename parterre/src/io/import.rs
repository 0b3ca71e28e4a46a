use std::collections::HashMap;

use itertools::Itertools;
use log::warn;

use crate::entities::{Instance, ItemKind, Manifest};
use crate::error::{InputError, InputResult};
use crate::geometry::shapes::{Annulus, Circle, Ellipse, Frame, Rectangle, RightTriangle, Square};
use crate::geometry::{Shape, ShapeKind};
use crate::io::ext_repr::{ExtInstance, ExtItemKind, ExtShape};

/// Validates the parameters required by `kind` and builds the corresponding [`Shape`].
///
/// Fails with [`InputError::MissingParameter`] if a required key is absent and with
/// [`InputError::Constraint`] if a length is non-positive or a ring/frame is inverted.
/// Parameters not used by `kind` are ignored.
pub fn build_shape(kind: ShapeKind, parameters: &HashMap<String, f64>) -> InputResult<Shape> {
    let required = kind.required_params();
    let values = required
        .iter()
        .map(|&param| {
            parameters
                .get(param)
                .copied()
                .ok_or(InputError::MissingParameter { kind, param })
        })
        .collect::<InputResult<Vec<f64>>>()?;

    let unused = parameters
        .keys()
        .filter(|k| !required.contains(&k.as_str()))
        .sorted()
        .collect_vec();
    if !unused.is_empty() {
        warn!("[IMPORT] ignoring parameters {unused:?}, not used by shape kind `{kind}`");
    }

    let shape: Shape = match (kind, values.as_slice()) {
        (ShapeKind::Circle, &[r]) => Circle::try_new(r)?.into(),
        (ShapeKind::Square, &[side]) => Square::try_new(side)?.into(),
        (ShapeKind::Rectangle, &[w, h]) => Rectangle::try_new(w, h)?.into(),
        (ShapeKind::Ellipse, &[a, b]) => Ellipse::try_new(a, b)?.into(),
        (ShapeKind::RightTriangle, &[base, h]) => RightTriangle::try_new(base, h)?.into(),
        (ShapeKind::Frame, &[iw, ih, ow, oh]) => Frame::try_new(iw, ih, ow, oh)?.into(),
        (ShapeKind::Annulus, &[ri, ro]) => Annulus::try_new(ri, ro)?.into(),
        _ => unreachable!("parameter count is fixed by ShapeKind::required_params"),
    };
    Ok(shape)
}

/// Builds a validated [`Manifest`] out of the externally supplied item kinds.
/// Kinds receive their index as id.
pub fn import_manifest(ext_items: &[ExtItemKind]) -> InputResult<Manifest> {
    let kinds = ext_items
        .iter()
        .enumerate()
        .map(|(id, ext)| {
            ItemKind::try_new(
                id,
                ext.category.as_str(),
                ext.variety_id,
                ext.variety_name.as_str(),
                ext.clearance_radius,
                ext.quantity,
            )
        })
        .collect::<InputResult<Vec<ItemKind>>>()?;
    Manifest::try_new(kinds)
}

pub fn import_shape(ext_shape: &ExtShape) -> InputResult<Shape> {
    build_shape(ext_shape.kind, &ext_shape.parameters)
}

/// Imports an instance into the library
pub fn import_instance(ext_instance: &ExtInstance) -> InputResult<Instance> {
    let shape = import_shape(&ext_instance.domain)?;
    let manifest = import_manifest(&ext_instance.items)?;
    Ok(Instance::new(shape, manifest))
}
