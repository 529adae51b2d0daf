//! Headless graph dump: fetch a paper or author, build the citation view,
//! print the renderer data set as JSON.

use std::env;
use std::process;

use citegraph::{CitationGraphView, DiscoveryApi, HttpDiscoveryClient, SiteConfig};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (kind, query) = match args.as_slice() {
        [kind, query] => (kind.as_str(), query.as_str()),
        _ => {
            eprintln!("usage: citegraph_viewer <paper|author> <id-or-name>");
            process::exit(2);
        }
    };

    let config = match SiteConfig::from_default_sources() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            process::exit(2);
        }
    };
    let client = match HttpDiscoveryClient::from_config(&config) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("client error: {err}");
            process::exit(1);
        }
    };

    let mut view = CitationGraphView::new();
    let result = match kind {
        "paper" => client.get_paper(query).map(|payload| view.seed_paper(&payload)),
        "author" => client
            .get_author(query)
            .map(|papers| view.seed_author(query, &papers)),
        other => {
            eprintln!("unknown query kind: {other} (expected paper or author)");
            process::exit(2);
        }
    };
    if let Err(err) = result {
        eprintln!("fetch failed: {err}");
        process::exit(1);
    }

    match serde_json::to_string_pretty(&view.data_set()) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("encode failed: {err}");
            process::exit(1);
        }
    }
}
