//! Personnel: who may use the system, and who reports to whom.

pub mod assembler;
pub mod directory;
pub mod person;

pub use assembler::{FlattenForest, PersonNode, PersonNodeBuilder, PersonnelAssembler};
pub use directory::Personnel;
pub use person::{ANONYMOUS, Credential, Person, Role};
