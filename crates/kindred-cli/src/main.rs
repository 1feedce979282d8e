use kindred::{FamilyGraph, LayoutOptions, Link, Person};
use serde::Serialize;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Layout(kindred::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Layout(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<kindred::Error> for CliError {
    fn from(value: kindred::Error) -> Self {
        Self::Layout(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Links,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    graph: bool,
    config: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "kindred\n\
\n\
USAGE:\n\
  kindred [layout] [--pretty] [--graph] [--config <options.json>] [--out <path>] [<path>|-]\n\
  kindred links [--pretty] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - Input is a JSON array of person records; if <path> is omitted or '-', it is read from stdin.\n\
  - layout prints the records with x/y; --graph prints layers, positions and relations instead.\n\
  - --config reads layout options (nodeWidth, nodeHeight, horizMargin, vertMargin, iterations).\n\
  - Diagnostics go to stderr; set RUST_LOG (e.g. RUST_LOG=kindred=debug) for more.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "links" => args.command = Command::Links,
            "--pretty" => args.pretty = true,
            "--graph" => args.graph = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn load_options(path: Option<&str>) -> Result<LayoutOptions, CliError> {
    let opts = match path {
        None => LayoutOptions::default(),
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
    };
    opts.validate()?;
    Ok(opts)
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match out {
        None => println!("{text}"),
        Some(path) => std::fs::write(path, text)?,
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeOut<'a> {
    id: &'a str,
    layer: usize,
    position_in_layer: usize,
    x: f64,
    y: f64,
    children: Vec<&'a str>,
    partners: Vec<&'a str>,
    parents: Vec<&'a str>,
}

#[derive(Serialize)]
struct GraphOut<'a> {
    width: f64,
    height: f64,
    layers: Vec<Vec<&'a str>>,
    nodes: Vec<NodeOut<'a>>,
}

fn graph_out<'a>(g: &'a FamilyGraph, opts: &LayoutOptions) -> GraphOut<'a> {
    let nodes = g.nodes();
    let id = move |ix: &usize| -> &'a str { nodes[*ix].id.as_str() };
    let bounds = g.bounds(opts);
    GraphOut {
        width: bounds.width,
        height: bounds.height,
        layers: g
            .layers()
            .iter()
            .map(|layer| layer.iter().map(id).collect())
            .collect(),
        nodes: nodes
            .iter()
            .map(|n| NodeOut {
                id: &n.id,
                layer: n.layer,
                position_in_layer: n.position_in_layer,
                x: n.x,
                y: n.y,
                children: n.children.iter().map(id).collect(),
                partners: n.partners.iter().map(id).collect(),
                parents: n.parents.iter().map(id).collect(),
            })
            .collect(),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let mut people: Vec<Person> = kindred::parse_people(&text)?;
    let opts = load_options(args.config.as_deref())?;

    let g = kindred::layout(&mut people, &opts);
    if g.owner().is_none() && !g.is_empty() {
        tracing::debug!(records = people.len(), "no record is flagged as owner");
    }

    match args.command {
        Command::Layout if args.graph => {
            write_json(&graph_out(&g, &opts), args.pretty, args.out.as_deref())
        }
        Command::Layout => write_json(&people, args.pretty, args.out.as_deref()),
        Command::Links => {
            let links: Vec<Link<'_>> = g.links();
            write_json(&links, args.pretty, args.out.as_deref())
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
