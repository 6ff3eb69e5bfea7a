//! Canonical, engine-facing trigger types.
//!
//! Every type here is `Serialize + Deserialize + Debug + Clone` with
//! equality by value. The descriptor config map uses `BTreeMap` (never
//! `HashMap`) so serialization and iteration order are deterministic — the
//! engine does not care about key order, but tests and diffs do.

pub mod triggers;

pub use triggers::*;
