//! Typed IDs used by the identifier composer.
//!
//! IDs are prefixed ULIDs (`{prefix}_{ulid}`), stable once assigned. A
//! [`TokenId`] identifies one element of a format and survives reorders; an
//! [`InventoryId`] names the inventory whose records are being identified and
//! keys the per-inventory sequence counter.

use crate::define_id;

define_id!(TokenId, "tok");
define_id!(InventoryId, "inv");
