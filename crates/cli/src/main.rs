// ABOUTME: CLI for querying HTML documents with the htmlutils helpers.
// ABOUTME: Loads HTML from a URL or file/stdin, runs a tag query and prints JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use ego_tree::NodeRef;
use htmlutils::{find_all, find_node, get_attr, get_data, HtmlNode, TagQuery};
use scraper::{Html, Node};
use serde_json::{json, Map, Value};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Query an HTML document by tag and attribute and output JSON.
#[derive(Parser, Debug)]
#[command(name = "htmlutils")]
#[command(about = "Query HTML documents by tag and attribute and print JSON", long_about = None)]
struct Cli {
    /// Output compact JSON instead of pretty.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    /// Log debug output to stderr. RUST_LOG takes precedence when set.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Source {
    /// HTML source: http/https URL, local file path, or "-" for stdin.
    target: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every node matching QUERY, in document order.
    All {
        /// Tag query: `tag`, `tag[key=value]` or `tag[ns|key=value]`.
        query: TagQuery,
        #[command(flatten)]
        source: Source,
    },
    /// Print the first node matching QUERY, or null.
    First {
        /// Tag query: `tag`, `tag[key=value]` or `tag[ns|key=value]`.
        query: TagQuery,
        #[command(flatten)]
        source: Source,
    },
    /// Print the KEY attribute of every node matching QUERY ("" when absent).
    Attr {
        /// Tag query: `tag`, `tag[key=value]` or `tag[ns|key=value]`.
        query: TagQuery,
        key: String,
        /// Attribute namespace; leave empty for ordinary HTML attributes.
        #[arg(long, default_value = "")]
        ns: String,
        #[command(flatten)]
        source: Source,
    },
    /// Print the concatenated text of the document, or of the first match of --query.
    Text {
        #[arg(long)]
        query: Option<TagQuery>,
        #[command(flatten)]
        source: Source,
    },
}

impl Command {
    fn source(&self) -> &Source {
        match self {
            Command::All { source, .. }
            | Command::First { source, .. }
            | Command::Attr { source, .. }
            | Command::Text { source, .. } => source,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = run(&cli.command)?;

    if cli.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(command: &Command) -> Result<Value> {
    let source = command.source();
    let html = load_html(&source.target)?;
    let document = Html::parse_document(&html);
    let root = document.tree.root();
    debug!(source = %source.target, bytes = html.len(), "parsed document");

    let output = match command {
        Command::All { query, .. } => {
            let nodes = find_all(root, query.matcher());
            info!(query = %query, matched = nodes.len(), "collected matches");
            Value::Array(nodes.into_iter().map(describe).collect())
        }
        Command::First { query, .. } => find_node(root, query.matcher())
            .map(describe)
            .unwrap_or(Value::Null),
        Command::Attr { query, key, ns, .. } => Value::Array(
            find_all(root, query.matcher())
                .iter()
                .map(|node| Value::from(get_attr(node, ns, key)))
                .collect(),
        ),
        Command::Text { query: None, .. } => Value::String(get_data(root)),
        Command::Text {
            query: Some(query),
            ..
        } => find_node(root, query.matcher())
            .map(|node| Value::String(get_data(node)))
            .unwrap_or(Value::Null),
    };

    Ok(output)
}

fn describe(node: NodeRef<'_, Node>) -> Value {
    let attrs: Map<String, Value> = node
        .attrs()
        .map(|attr| {
            let name = if attr.namespace.is_empty() {
                attr.key.to_string()
            } else {
                format!("{}:{}", attr.namespace, attr.key)
            };
            (name, Value::from(attr.value))
        })
        .collect();

    json!({
        "kind": node.kind(),
        "tag": node.tag(),
        "attrs": attrs,
        "text": get_data(node),
    })
}

fn load_html(target: &str) -> Result<String> {
    let bytes = if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else if target.starts_with("http://") || target.starts_with("https://") {
        let resp = reqwest::blocking::get(target)?.error_for_status()?;
        resp.bytes()?.to_vec()
    } else {
        let path = PathBuf::from(target);
        if !path.exists() {
            return Err(anyhow!("file not found: {}", target));
        }
        fs::read(path)?
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
