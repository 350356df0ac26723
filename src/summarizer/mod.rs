//! Summary assembly.
//!
//! Provides deterministic top-k sentence selection and the ordered
//! [`Summary`](selector::Summary) artifact.

pub mod selector;
