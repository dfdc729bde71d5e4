// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod budget;
pub mod cli;
pub mod commands;
pub mod db;
pub mod error;
pub mod loader;
pub mod models;
pub mod projection;
pub mod render;
pub mod session;
pub mod settings;
pub mod utils;
