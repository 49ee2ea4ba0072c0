//! Samovar mini-app terminal driver.
//!
//! Runs the widget core outside the chat platform: loads the menu, then
//! drives a [`Session`] over stdin commands, rendering each view as plain
//! text. Host-platform calls go through [`LocalHost`], which turns them
//! into log lines.
//!
//! Commands: `open <category>`, `back`, `search <query>`, `+ <id>`,
//! `- <id>`, `cart`, `close`, `checkout`, `help`, `quit`.

#![cfg_attr(not(test), forbid(unsafe_code))]
// The interactive shell writes straight to the terminal.
#![allow(clippy::print_stdout)]

use std::io::{self, BufRead, Write};

use samovar_core::ItemId;
use samovar_miniapp::catalog::SheetClient;
use samovar_miniapp::config::MiniappConfig;
use samovar_miniapp::host::{Host, LocalHost};
use samovar_miniapp::session::Session;
use samovar_miniapp::views::{QuantityControl, Screen};

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "samovar_miniapp=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = MiniappConfig::from_env().expect("Failed to load configuration");
    let client = SheetClient::new(&config).expect("Failed to build HTTP client");

    let mut session = Session::new(LocalHost);
    print_screen(&session);

    session.catalog_loaded(client.load_menu().await);
    print_screen(&session);

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "" => {}
            "quit" | "exit" => break,
            "back" => session.back(),
            "open" => session.select_category(rest),
            "search" => session.search_input(rest),
            "+" | "add" => session.increment(ItemId::new(rest)),
            "-" | "remove" => session.decrement(&ItemId::new(rest)),
            "cart" => session.open_cart(),
            "close" => session.close_cart(),
            "checkout" => session.checkout(),
            "help" => print_help(),
            other => println!("unknown command: {other} (try 'help')"),
        }

        print_screen(&session);
        prompt();
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn print_help() {
    println!("commands:");
    println!("  open <category>   show items in a category");
    println!("  back              return to the category grid");
    println!("  search <query>    filter items by name or category");
    println!("  + <id> / - <id>   change an item's quantity");
    println!("  cart / close      open or close the cart overlay");
    println!("  checkout          submit the order");
    println!("  quit              exit");
}

/// Render the current session state as plain text.
fn print_screen<H: Host>(session: &Session<H>) {
    match session.screen() {
        Screen::Loading => println!("Loading menu..."),
        Screen::Failed { message } => println!("!! {message}"),
        Screen::Categories { cards } => {
            println!("== Categories ==");
            for card in cards {
                println!("  {}", card.name);
            }
        }
        Screen::Items(view) => {
            println!("== {} ==", view.title);
            for item in view.items {
                let control = match item.control {
                    QuantityControl::Add => "[ + ]".to_owned(),
                    QuantityControl::Stepper { quantity } => format!("[ - {quantity} + ]"),
                };
                println!("  {:<6} {:<24} {:>10}  {control}", item.id, item.name, item.price);
            }
        }
    }

    let chrome = session.chrome();
    if chrome.cart_visible {
        println!("[{}]", chrome.cart_label);
    }

    if let Some(panel) = session.cart_panel() {
        println!("== Cart ==");
        if panel.is_empty() {
            println!("  (empty)");
        }
        for line in &panel.lines {
            println!("  {} x{} = {}", line.name, line.quantity, line.line_total);
        }
        println!("  Total: {}", panel.summary.total_price);
    }
}
