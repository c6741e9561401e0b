pub mod address;
pub mod selection;
pub mod taxonomy;

pub use address::{AddressError, SubjectAddress};
pub use selection::Selection;
pub use taxonomy::{BoardEntry, ShapeMismatch, Taxonomy};
