/// Serializable representations of instances and candidate placements
pub mod ext_repr;

/// Validation and construction of shapes and instances from their external representation
pub mod import;

/// Conversion of candidates into their external representation
pub mod export;
