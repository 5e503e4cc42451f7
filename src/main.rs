use anyhow::{Context, Result};
use clap::Parser;
use search_header::{HeaderOptions, SearchHeader, TabSlot, serialize_query_params};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "search-header",
    version,
    about = "Interactive driver for the search header store",
    long_about = None
)]
struct Cli {
    /// Enable verbose output (state-transition logs)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut header = SearchHeader::new();
    println!("search-header demo. Type 'help' for commands, 'quit' to exit.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().context("flush prompt")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("read command")?;
        if read == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        run_command(&mut header, line);
        settle(&mut header);
    }

    Ok(())
}

fn run_command(header: &mut SearchHeader, line: &str) {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "search" => header.update_search(rest),
        "clear" => header.clear_search(),
        "tab" => match parse_tab(rest) {
            Some(tab) => header.set_current_tab(tab),
            None => eprintln!("unknown tab '{rest}' (expected first|second|third)"),
        },
        "filter" => header.set_search_query(rest),
        "filters" => header.show_filter(),
        "count" => match rest.parse() {
            Ok(count) => header.set_filters_count(count),
            Err(_) => eprintln!("count expects an integer"),
        },
        "total" => match rest.parse() {
            Ok(count) => header.set_total_items(count),
            Err(_) => eprintln!("total expects an integer"),
        },
        "reload" => header.set_reload(rest == "on"),
        "params" => {
            match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(rest) {
                Ok(params) => header.merge_query_params(&params),
                Err(e) => eprintln!("params expects a JSON object: {e}"),
            }
        }
        "params-reset" => header.set_default_query_params(),
        "scroll" => header.set_scroll_bottom(rest != "off"),
        "respond" => match rest.parse() {
            Ok(count) => header.set_total_items_in_last_response(count),
            Err(_) => eprintln!("respond expects an integer"),
        },
        "go" => header.request_search(),
        "reset" => header.set_header_options(HeaderOptions::default()),
        "url" => println!("{}", header.query_url_more_data_on_scroll()),
        "show" => show(header),
        "help" => help(),
        _ => eprintln!("unknown command '{command}' (try 'help')"),
    }
}

/// Block until any pending debounce deadline has fired, so the printed state
/// reflects the settled trigger counter.
fn settle(header: &mut SearchHeader) {
    while let Some(deadline) = header.next_deadline() {
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
        header.tick();
    }
}

fn parse_tab(name: &str) -> Option<TabSlot> {
    match name {
        "first" => Some(TabSlot::First),
        "second" => Some(TabSlot::Second),
        "third" => Some(TabSlot::Third),
        _ => None,
    }
}

fn show(header: &SearchHeader) {
    let state = header.state();
    println!("tab:            {:?}", state.active_tab);
    println!("search text:    {:?}", state.search_text);
    println!("applied query:  {:?}", state.applied_query);
    println!("search query:   {}", state.search_query);
    println!("scroll url:     {}", header.query_url_more_data_on_scroll());
    println!("trigger:        {}", header.search_action());
    println!("scroll state:   {:?}", state.pending_scroll_fetch);
    println!("filters shown:  {}", state.filters_visible);
    println!(
        "query params:   {}",
        serialize_query_params(Some(&state.query_params))
            .map(|pairs| pairs.to_string())
            .unwrap_or_default()
    );
}

fn help() {
    println!("commands:");
    println!("  search <text>     commit search text (>= 4 chars; empty clears)");
    println!("  clear             clear the search text");
    println!("  tab <slot>        switch tab (first|second|third)");
    println!("  filter <frag>     commit a filter fragment, e.g. '&Category=Books'");
    println!("  filters           toggle filter panel visibility");
    println!("  count <n>         set applied-filter count");
    println!("  total <n>         set total item count");
    println!("  reload on|off     set the reload flag");
    println!("  params <json>     merge a JSON object into query params");
    println!("  params-reset      restore default query params");
    println!("  scroll [off]      report scroll bottom reached / left");
    println!("  respond <n>       report item count of the last response");
    println!("  go                request a debounced search trigger");
    println!("  reset             replace header options and reset state");
    println!("  url               print the scroll fetch fragment");
    println!("  show              print the current state");
    println!("  quit              exit");
}
