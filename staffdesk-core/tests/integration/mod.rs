// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration Tests for Staffdesk Core
//!
//! These tests run complete workflows across the managers and the sync
//! coordinator on one shared in-memory backend.
//!
//! Run with: cargo test --test integration

mod employee_workflow_test;
mod sync_workflow_test;
