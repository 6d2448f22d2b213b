// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod apply;
pub mod config;
pub mod constants;
pub mod encode;
pub mod error;
pub mod generate;
pub mod template;
