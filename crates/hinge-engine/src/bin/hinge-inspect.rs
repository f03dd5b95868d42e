//! hinge-inspect: load an HTML file, bootstrap its widgets and print
//! their state, optionally after simulated interaction.
//!
//! Usage:
//!   hinge-inspect <file.html> [--config cfg.json] [--url URL]
//!                 [--click ID]... [--focus ID]... [--press KEY]...
//!                 [--hash FRAGMENT]... [--advance MS] [--data-layer]
//!
//! Steps run in the order given. `--press` takes a DOM key name such as
//! `ArrowRight`, `End` or `" "` and sends it to the focused element.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use hinge_engine::dom::Key;
use hinge_engine::widgets::DataLayer;
use hinge_engine::{init_tracing, Config, Page};

enum Step {
    Click(String),
    Focus(String),
    Press(Key),
    Hash(String),
    Advance(u64),
}

struct Args {
    input: String,
    config: Option<String>,
    url: Option<String>,
    data_layer: bool,
    steps: Vec<Step>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut input = None;
    let mut parsed = Args {
        input: String::new(),
        config: None,
        url: None,
        data_layer: false,
        steps: Vec::new(),
    };

    while let Some(arg) = args.next() {
        let mut value = |name: &str| args.next().with_context(|| format!("{name} needs a value"));
        match arg.as_str() {
            "--config" => parsed.config = Some(value("--config")?),
            "--url" => parsed.url = Some(value("--url")?),
            "--click" => parsed.steps.push(Step::Click(value("--click")?)),
            "--focus" => parsed.steps.push(Step::Focus(value("--focus")?)),
            "--press" => parsed.steps.push(Step::Press(Key::parse(&value("--press")?))),
            "--hash" => parsed.steps.push(Step::Hash(value("--hash")?)),
            "--advance" => {
                let ms = value("--advance")?;
                parsed.steps.push(Step::Advance(ms.parse().with_context(|| format!("bad --advance {ms}"))?));
            }
            "--data-layer" => parsed.data_layer = true,
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path => input = Some(path.to_string()),
        }
    }

    parsed.input = input.context("usage: hinge-inspect <file.html> [options]")?;
    Ok(parsed)
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            Config::from_json(&json)?
        }
        None => Config::default(),
    };
    if args.data_layer {
        config.widgets.data_layer = Some(true);
    }
    init_tracing(&config.log_filter);

    let html = std::fs::read_to_string(&args.input).with_context(|| format!("reading {}", args.input))?;
    let url = args.url.clone().unwrap_or_else(|| config.base_url.clone());

    let data_layer = Rc::new(RefCell::new(DataLayer::new()));
    let mut page = Page::from_html_at(&html, &url, config)?.with_data_layer(Rc::clone(&data_layer));
    page.ready();

    for step in &args.steps {
        match step {
            Step::Click(id) => {
                let target = page.element(id)?;
                page.click(target);
            }
            Step::Focus(id) => {
                let target = page.element(id)?;
                page.focus(target);
            }
            Step::Press(key) => {
                if page.press(key.clone()).is_none() {
                    tracing::warn!("nothing focused, {} not sent", key.to_key_string());
                }
            }
            Step::Hash(fragment) => {
                page.navigate_to_fragment(fragment);
            }
            Step::Advance(ms) => {
                page.advance(*ms);
            }
        }
    }

    println!("hinge-inspect v{} at {}", hinge_engine::VERSION, page.document().url());
    for (id, widget) in page.registry().iter() {
        let root = widget.root();
        println!(
            "{:<10} {:<6} root={} id={} items={} active={:?}",
            widget.variant(),
            id,
            root,
            page.document().id(root).unwrap_or("-"),
            widget.items().len(),
            widget.active_indices()
        );
    }

    if args.data_layer {
        println!("{}", data_layer.borrow().to_json()?);
    }
    Ok(())
}
