use std::fmt::Write;

use ipnet::Ipv6Net;
use serde::Serialize;

use crate::{Error, Route, RouteTable};

#[derive(Serialize)]
pub struct RouteJson {
    pub prefix: String,
    pub address: String,
    pub mask_len: u8,
    pub metric: u32,
}

#[derive(Serialize)]
pub struct SubtreeJson {
    pub prefix: String,
    pub routes: Vec<RouteJson>,
}

#[derive(Serialize)]
pub struct RibJson {
    pub routes: Vec<RouteJson>,
    pub subtrees: Vec<SubtreeJson>,
}

impl From<&Route> for RouteJson {
    fn from(route: &Route) -> Self {
        Self {
            prefix: format!("{}/{}", route.addr(), route.mask_len()),
            address: route.addr().to_string(),
            mask_len: route.mask_len(),
            metric: route.metric(),
        }
    }
}

pub fn show_routes<'a>(routes: impl IntoIterator<Item = &'a Route>) -> String {
    let mut buf = String::new();
    for route in routes {
        writeln!(buf, "{}", route).unwrap();
    }
    buf
}

pub fn rib_json(table: &RouteTable, subtrees: &[Ipv6Net]) -> RibJson {
    RibJson {
        routes: table.iter().map(RouteJson::from).collect(),
        subtrees: subtrees
            .iter()
            .map(|prefix| SubtreeJson {
                prefix: prefix.to_string(),
                routes: table.subtree(prefix).map(RouteJson::from).collect(),
            })
            .collect(),
    }
}

pub fn show_json(table: &RouteTable, subtrees: &[Ipv6Net]) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&rib_json(table, subtrees))?)
}
