// Crate root library declaration and module exports.
pub mod layout;
pub mod model;
pub mod palette;
pub mod plan;
pub mod render;
