// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod money;
pub mod period;
pub mod session;
pub mod summary;
pub mod utils;
