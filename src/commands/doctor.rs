// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::loader::{Collection, RecordStore, normalize};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

pub fn find_issues(store: &impl RecordStore) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    for collection in Collection::ALL {
        let docs = store.fetch(collection)?;
        if docs.is_empty() {
            rows.push(vec!["empty_collection".into(), collection.to_string()]);
            continue;
        }
        for doc in &docs {
            let detail =
                |issue: &dyn std::fmt::Display| format!("{} #{}: {}", collection, doc.id, issue);
            match normalize(collection, doc) {
                Ok((_, Some(issue))) => rows.push(vec!["zero_filled".into(), detail(&issue)]),
                Ok((_, None)) => {}
                Err(issue) => rows.push(vec!["rejected".into(), detail(&issue)]),
            }
        }
    }
    Ok(rows)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = find_issues(conn)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
