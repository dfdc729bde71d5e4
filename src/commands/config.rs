// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::settings::{Settings, get_setting, set_setting};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("key").unwrap().trim();
            let value = sub.get_one::<String>("value").unwrap();
            let stored = set_setting(conn, key, value)?;
            println!("{} set to {}", key, stored);
        }
        Some(("get", sub)) => {
            let key = sub.get_one::<String>("key").unwrap().trim();
            let effective = Settings::load(conn)?
                .entries()
                .into_iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v);
            match (get_setting(conn, key)?, effective) {
                (Some(v), _) => println!("{}", v),
                (None, Some(default)) => println!("{} (default)", default),
                (None, None) => println!("{} is not a known setting", key),
            }
        }
        Some(("list", _)) => {
            let rows = Settings::load(conn)?
                .entries()
                .into_iter()
                .map(|(k, v)| vec![k.to_string(), v])
                .collect();
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        _ => {}
    }
    Ok(())
}
