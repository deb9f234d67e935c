//! Interactive console session driving the controller.
//!
//! This is the thin UI layer: it translates typed commands into controller
//! calls and prints the current page after each one. Remote failures are
//! logged at debug level and never rendered; per the error-handling
//! contract the only user-visible feedback is the operation notices.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::controller::{ConfirmPrompt, ListFormController, Notice, Notifier};

/// Prints each notice on its own line, standing in for the toast.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        println!("* {}", notice.text());
    }
}

/// Blocking y/n prompt on stdin.
pub struct ConsoleConfirm;

impl ConfirmPrompt for ConsoleConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        let _ = std::io::stdout().flush();
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

const HELP: &str = "\
commands:
  show                  print the current page
  page <n>              go to page n (as displayed in the pager)
  add <name> [-- desc]  create a new item
  edit <id>             load an item into the form
  name <text>           set the form name while editing
  desc <text>           set the form description while editing
  save                  submit the form
  cancel                leave edit mode and clear the form
  done <id> / undone <id>  set the completed flag
  rm <id>               delete an item (asks for confirmation)
  quit                  exit";

/// Run the interactive session until stdin closes or `quit`.
pub async fn run(mut controller: ListFormController) -> anyhow::Result<()> {
    if let Err(e) = controller.fetch_page(0).await {
        debug!("initial fetch failed: {}", e);
    }
    render(&controller);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "show" => render(&controller),
            "page" => {
                go_to_page(&mut controller, rest).await;
                render(&controller);
            }
            "add" => {
                if controller.is_edit_mode() {
                    println!("finish editing first (save or cancel)");
                    continue;
                }
                let (name, description) = match rest.split_once(" -- ") {
                    Some((n, d)) => (n.trim(), d.trim()),
                    None => (rest, ""),
                };
                controller.form_mut().name = name.to_string();
                controller.form_mut().description = description.to_string();
                if let Err(e) = controller.on_submit().await {
                    debug!("create failed: {}", e);
                }
                render(&controller);
            }
            "edit" => {
                match rest.parse::<i64>().ok().and_then(|id| {
                    controller.todos().iter().find(|t| t.id == Some(id)).cloned()
                }) {
                    Some(todo) => {
                        controller.handle_edit(&todo);
                        println!(
                            "editing #{}: name={:?} desc={:?}",
                            rest,
                            controller.form().name,
                            controller.form().description
                        );
                    }
                    None => println!("no item with id {:?} on this page", rest),
                }
            }
            "name" => {
                controller.form_mut().name = rest.to_string();
            }
            "desc" => {
                controller.form_mut().description = rest.to_string();
            }
            "save" => {
                if let Err(e) = controller.on_submit().await {
                    debug!("submit failed: {}", e);
                }
                render(&controller);
            }
            "cancel" => controller.cancel_edit(),
            "done" | "undone" => {
                if let Ok(id) = rest.parse::<i64>() {
                    if let Err(e) = controller.set_status(id, command == "done").await {
                        debug!("status patch failed: {}", e);
                    }
                    render(&controller);
                } else {
                    println!("usage: {} <id>", command);
                }
            }
            "rm" => {
                if let Ok(id) = rest.parse::<i64>() {
                    if let Err(e) = controller.delete_todo(id).await {
                        debug!("delete failed: {}", e);
                    }
                    render(&controller);
                } else {
                    println!("usage: rm <id>");
                }
            }
            _ => println!("unknown command; try 'help'"),
        }
    }

    Ok(())
}

async fn go_to_page(controller: &mut ListFormController, label: &str) {
    let Ok(label) = label.parse::<u32>() else {
        println!("usage: page <n>");
        return;
    };
    let Some(page) = controller
        .generated_pages()
        .iter()
        .find(|p| p.display_value == label)
        .map(|p| p.value)
    else {
        println!("no such page");
        return;
    };
    if let Err(e) = controller.fetch_page(page).await {
        debug!("page fetch failed: {}", e);
    }
}

fn render(controller: &ListFormController) {
    if controller.todos().is_empty() {
        println!("(no items)");
    }
    for todo in controller.todos() {
        println!(
            "{:>4}  [{}]  {:<24}  {}",
            todo.id.map(|id| id.to_string()).unwrap_or_default(),
            if todo.completed { "x" } else { " " },
            todo.name,
            todo.description.as_deref().unwrap_or("")
        );
    }
    if !controller.generated_pages().is_empty() {
        let pager: Vec<String> = controller
            .generated_pages()
            .iter()
            .map(|p| {
                if p.value == controller.page_num() {
                    format!("[{}]", p.display_value)
                } else {
                    p.display_value.to_string()
                }
            })
            .collect();
        println!("pages: {}", pager.join(" "));
    }
}
