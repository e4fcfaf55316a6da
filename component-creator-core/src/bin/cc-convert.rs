use component_creator_core::{inspect, ConvertError, ConvertOptions, Document, Tab};
use std::env;
use std::fs;
use std::process;

struct Args {
    snapshot: String,
    tabs: Vec<Tab>,
    name: Option<String>,
    config: Option<String>,
}

fn main() {
    env_logger::init();

    let args = match parse_args(env::args().skip(1).collect()) {
        Some(args) => args,
        None => {
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("✗ {}:", args.snapshot);
        print_error(&e);
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: cc-convert <snapshot.json|snapshot.yaml> [--tab TAB] [--name NAME] [--config options.yaml]");
    eprintln!();
    eprintln!("Tabs: styling, html, jsx, component (default), all");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  cc-convert card.json");
    eprintln!("  cc-convert card.json --tab jsx");
    eprintln!("  cc-convert hero.yaml --name HeroBanner --config options.yaml");
}

fn parse_args(args: Vec<String>) -> Option<Args> {
    let mut snapshot = None;
    let mut tabs = vec![Tab::Component];
    let mut name = None;
    let mut config = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--tab" => {
                let value = iter.next()?;
                tabs = if value == "all" {
                    // Nothing to show for the remote tab from the command line.
                    Tab::ALL.into_iter().filter(|t| *t != Tab::Generated).collect()
                } else {
                    match value.parse::<Tab>() {
                        Ok(tab) => vec![tab],
                        Err(e) => {
                            eprintln!("{}", e);
                            return None;
                        }
                    }
                };
            }
            "--name" => name = Some(iter.next()?),
            "--config" => config = Some(iter.next()?),
            "-h" | "--help" => return None,
            _ if snapshot.is_none() && !arg.starts_with("--") => snapshot = Some(arg),
            _ => {
                eprintln!("Unexpected argument: {}", arg);
                return None;
            }
        }
    }

    Some(Args {
        snapshot: snapshot?,
        tabs,
        name,
        config,
    })
}

fn run(args: &Args) -> Result<(), ConvertError> {
    let mut options = match &args.config {
        Some(path) => ConvertOptions::from_yaml(&fs::read_to_string(path)?)?,
        None => ConvertOptions::default(),
    };
    if let Some(name) = &args.name {
        options = options.with_component_name(name.clone());
    }

    let content = fs::read_to_string(&args.snapshot)?;
    let doc = Document::from_str_auto(&content)?;
    let inspection = inspect(&doc, &options)?;

    let with_headers = args.tabs.len() > 1;
    for tab in &args.tabs {
        if with_headers {
            println!("── {} ──", tab.title());
        }
        let text = inspection.render(*tab);
        println!("{}", text.trim_end());
        if with_headers {
            println!();
        }
    }
    Ok(())
}

fn print_error(error: &ConvertError) {
    match error {
        ConvertError::ExcludedRoot { tag } => {
            eprintln!("  Selected element <{}> cannot be converted", tag);
            eprintln!("    style, script, noscript, iframe, object and embed are skipped");
        }
        ConvertError::InvalidBaseUrl { url, reason } => {
            eprintln!("  Invalid baseUrl '{}':", url);
            eprintln!("    {}", reason);
        }
        ConvertError::JsonError(e) => {
            eprintln!("  JSON error:");
            eprintln!("    {}", e);
        }
        ConvertError::YamlError(e) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", e);
        }
        ConvertError::IoError(e) => {
            eprintln!("  Failed to read file:");
            eprintln!("    {}", e);
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
