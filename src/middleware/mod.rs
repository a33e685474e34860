// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (session, security headers).

pub mod security;
pub mod session;
pub mod session_gate;

pub use session::Session;
pub use session_gate::session_gate;
