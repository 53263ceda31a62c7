// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and their validity rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability.
//!
//! # Modules
//!
//! - [`toast`]: Store settings ([`MaxVisible`](toast::MaxVisible),
//!   [`GraceDelay`](toast::GraceDelay), [`DefaultDuration`](toast::DefaultDuration),
//!   [`HistoryCapacity`](toast::HistoryCapacity), [`TickInterval`](toast::TickInterval))

pub mod toast;
