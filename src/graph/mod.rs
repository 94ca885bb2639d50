pub mod conversion;
pub mod definition;
pub mod model;
pub mod store;

pub use conversion::*;
pub use definition::*;
pub use model::*;
pub use store::*;
