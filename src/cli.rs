// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn freq_arg(name: &'static str, default: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .default_value(default)
        .help("Bucket size: day | week | month")
}

pub fn build_cli() -> Command {
    Command::new("spendscope")
        .version(clap::crate_version!())
        .about("Expense and savings trends, projections, and category budgets")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("SPENDSCOPE_DB")
                .value_parser(value_parser!(PathBuf))
                .help("Path to the SQLite store (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging (RUST_LOG takes precedence)"),
        )
        .subcommand(Command::new("init").about("Create the store and its collections"))
        .subcommand(Command::new("menu").about("Interactive report menu (default)"))
        .subcommand(
            Command::new("report")
                .about("One-shot reports")
                .subcommand_required(true)
                .subcommand(output_flags(
                    Command::new("expenses")
                        .about("Expense totals per bucket")
                        .arg(freq_arg("freq", "week")),
                ))
                .subcommand(output_flags(
                    Command::new("savings")
                        .about("Savings totals per bucket")
                        .arg(freq_arg("freq", "week")),
                ))
                .subcommand(output_flags(
                    Command::new("projection")
                        .about("Flat projection of monthly savings")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(i64))
                                .allow_negative_numbers(true)
                                .help("Months to project, clamped to 1-12"),
                        ),
                ))
                .subcommand(output_flags(
                    Command::new("predict")
                        .about("Expected savings for the next week or month")
                        .arg(freq_arg("period", "month")),
                ))
                .subcommand(output_flags(
                    Command::new("budget")
                        .about("Average spend per category over a trailing window")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(u32).range(1..=120))
                                .help("Trailing window in months"),
                        ),
                )),
        )
        .subcommand(
            Command::new("import")
                .about("Append CSV documents (date,amount[,category][,note]) to a collection")
                .arg(
                    Arg::new("collection")
                        .required(true)
                        .help("upi | cash | savings"),
                )
                .arg(Arg::new("path").required(true).help("CSV file")),
        )
        .subcommand(
            Command::new("export")
                .about("Write aggregated series to a file")
                .subcommand_required(true)
                .subcommand(
                    Command::new("series")
                        .arg(Arg::new("kind").long("kind").required(true))
                        .arg(freq_arg("freq", "month"))
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Report settings")
                .subcommand_required(true)
                .subcommand(Command::new("get").arg(Arg::new("key").required(true)))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").required(true))
                        .arg(Arg::new("value").required(true)),
                )
                .subcommand(Command::new("list")),
        )
        .subcommand(
            Command::new("doctor").about("List documents the loader would zero-fill or reject"),
        )
}
