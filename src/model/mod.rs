//! Pure data structures: the stored [`Product`], the caller-supplied [`ProductDraft`] and the
//! validated [`ProductFields`] that sits between them.

pub mod product;

pub use product::*;
