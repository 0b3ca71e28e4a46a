mod candidate;
mod gene;
mod instance;
mod item_kind;
mod manifest;
mod population;

#[doc(inline)]
pub use candidate::Candidate;
#[doc(inline)]
pub use gene::Gene;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use item_kind::ItemKind;
#[doc(inline)]
pub use manifest::Manifest;
#[doc(inline)]
pub use population::Population;
