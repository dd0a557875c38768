//! Domain models for the todo service.
//!
//! - [`Item`]: a todo entry, the only stored entity.
//! - [`CreateItemInput`] / [`UpdateItemInput`]: request bodies for adding and
//!   partially updating items.
//! - [`DeleteItemResponse`]: acknowledgement returned after a removal.

mod item;

pub use item::*;
