// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Parser;
use ipnet::Ipv6Net;
use tracing::info;

use ribv6::config::Arg;
use ribv6::{RouteTable, logging, parse, show};

fn main() -> anyhow::Result<()> {
    let arg = Arg::parse();

    logging::tracing_set(&arg.logging_config());

    let routes = parse::parse_file(&arg.input)?;
    info!(path = %arg.input.display(), count = routes.len(), "routes read");

    let mut table = RouteTable::new();
    let summary = table.load(routes)?;
    info!(
        added = summary.added,
        replaced = summary.replaced,
        skipped = summary.skipped,
        rejected = summary.rejected,
        "route table loaded"
    );

    let subtrees: Vec<Ipv6Net> = if arg.subtree.is_empty() {
        table.routes().first().and_then(|r| r.prefix()).into_iter().collect()
    } else {
        arg.subtree.clone()
    };

    if arg.json {
        println!("{}", show::show_json(&table, &subtrees)?);
        return Ok(());
    }

    println!("\nRIB:");
    table.show();

    for prefix in subtrees.iter() {
        println!("\n\nsubtree walk of {}\n", prefix);
        table.subtree_show(prefix);
    }

    Ok(())
}
