//! Rust code generation modules.

pub mod de;
pub mod entities;
pub mod list;
pub mod ser;
pub mod types;

pub use de::DeGenerator;
pub use entities::EntitiesGenerator;
pub use list::ListGenerator;
pub use ser::SerGenerator;
pub use types::TypeGenerator;
