//! Line-oriented CLI over the litetask core.
//!
//! # Responsibility
//! - Act as a minimal presentation layer: translate input lines into store
//!   operations and render the store's derived views.
//! - Double as a smoke harness that exercises every core operation.
//!
//! # Invariants
//! - All state lives in `TodoStore`; this binary keeps none of its own.
//! - Row numbers shown to the user are 1-based positions in the currently
//!   filtered view, resolved to stable ids before any mutation.

use litetask_core::{core_version, default_log_level, init_logging, Filter, TodoId, TodoStore};
use std::io::{self, BufRead, Write};

const LOG_DIR_ENV: &str = "LITETASK_LOG_DIR";

fn main() {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(message) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {message}");
        }
    }

    println!("litetask {} — type `help` for commands", core_version());

    let mut store = TodoStore::new();
    let stdin = io::stdin();
    print_prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if !dispatch(&mut store, line.trim()) {
            break;
        }
        print_prompt();
    }
}

/// Handles one input line. Returns `false` when the session should end.
fn dispatch(store: &mut TodoStore, line: &str) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "add" => {
            if store.add_todo(rest).is_none() {
                println!("nothing added: text is empty");
            }
        }
        "done" => match resolve_row(store, rest) {
            Some((id, _)) => store.toggle_complete(id),
            None => println!("no such row: {rest}"),
        },
        "rm" => match resolve_row(store, rest) {
            Some((id, _)) => store.delete_todo(id),
            None => println!("no such row: {rest}"),
        },
        "edit" => edit(store, rest),
        "filter" => match Filter::parse(rest) {
            Some(filter) => store.set_filter(filter),
            None => println!("unknown filter `{rest}`; expected all|active|completed"),
        },
        "list" => print_list(store),
        "stats" => print_stats(store),
        "help" => print_help(),
        "quit" | "exit" => return false,
        other => println!("unknown command `{other}`; type `help`"),
    }
    true
}

/// `edit <row> <new text>` — runs a full edit session against the store.
fn edit(store: &mut TodoStore, args: &str) {
    let (row, new_text) = match args.split_once(char::is_whitespace) {
        Some((row, new_text)) => (row, new_text),
        None => (args, ""),
    };

    let Some((id, current_text)) = resolve_row(store, row) else {
        println!("no such row: {row}");
        return;
    };

    store.start_edit(id, current_text);
    store.set_edit_text(new_text);
    store.save_edit();
    if new_text.trim().is_empty() {
        println!("edit discarded: text is empty");
    }
}

/// Resolves a 1-based row number in the filtered view to `(id, text)`.
fn resolve_row(store: &TodoStore, arg: &str) -> Option<(TodoId, String)> {
    let row: usize = arg.parse().ok()?;
    let visible = store.filtered_todos();
    let todo = visible.get(row.checked_sub(1)?)?;
    Some((todo.id, todo.text.clone()))
}

fn print_list(store: &TodoStore) {
    let visible = store.filtered_todos();
    if visible.is_empty() {
        println!("(no {} todos)", store.filter().as_str());
        return;
    }
    for (position, todo) in visible.iter().enumerate() {
        let mark = if todo.completed { "x" } else { " " };
        println!(
            "{:>3} [{mark}] {}  (created {})",
            position + 1,
            todo.text,
            todo.created_at
        );
    }
}

fn print_stats(store: &TodoStore) {
    println!(
        "total={} active={} completed={} filter={}",
        store.total_count(),
        store.active_count(),
        store.completed_count(),
        store.filter().as_str()
    );
}

fn print_help() {
    println!("commands:");
    println!("  add <text>         add a todo");
    println!("  done <row>         toggle completion for a visible row");
    println!("  rm <row>           delete a visible row");
    println!("  edit <row> <text>  replace a visible row's text");
    println!("  filter <name>      set view: all|active|completed");
    println!("  list               show the filtered view");
    println!("  stats              show summary counts");
    println!("  quit               exit");
}

fn print_prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
