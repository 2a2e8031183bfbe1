//! Shared data contracts between the support console frontend and the
//! backend it talks to.
//!
//! Everything here is an opaque payload owned by the backend; the frontend
//! renders these shapes read-only and replaces them wholesale on each fetch.

pub mod support;
