//! Row and session id generation.
//!
//! Ids are opaque unique strings generated at write time and stable for
//! the life of a row. The sheet has no autoincrement, so uniqueness comes
//! from random UUIDs in simple (dash-free) form.

use uuid::Uuid;

pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
