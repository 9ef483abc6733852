//! SQLite type mappings
//!
//! SQLite reports whatever type name a column was declared with, and the
//! drivers hand values back by storage class. Only the affinity names are
//! mapped; anything else falls back to the default scalar.

use schemagen_core::{Adapter, TypeNode};
use schemagen_types::Dialect;

/// Build the SQLite adapter
#[must_use]
pub fn sqlite_adapter() -> Adapter {
    Adapter::builder(Dialect::SQLite)
        .default_scalar(TypeNode::identifier("string"))
        .scalar("any", TypeNode::identifier("unknown"))
        .scalar("blob", TypeNode::identifier("Buffer"))
        // stored as 0/1 integers
        .scalars_as(&["boolean", "integer", "numeric", "real"], "number")
        .scalar("text", TypeNode::identifier("string"))
        .build()
}
