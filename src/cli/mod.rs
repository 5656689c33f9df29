pub mod contact_commands;
pub mod context;
pub mod task_commands;

use std::path::Path;

use rusqlite::Connection;

use crate::contacts::ContactsView;
use crate::db::schema;
use crate::model::Uid;
use crate::ops::user_ops;
use crate::store::UsersService;
use context::CliContext;

/// Run the interactive REPL.
pub fn run(db_path: &Path) {
    println!("Join - tasks and contacts");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let conn = match Connection::open(db_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error opening database: {}", e);
            return;
        }
    };

    if let Err(e) = schema::initialize(&conn) {
        eprintln!("Error initializing database: {}", e);
        return;
    }

    let mut ctx = CliContext::new(UsersService::new(conn));

    loop {
        let Some(line) = ctx.read_line("> ") else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, args) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match command {
            "help" => print_help(),
            "exit" | "quit" => break,
            "signup" => sign_up(&mut ctx),
            "login" => log_in(&mut ctx, args),
            "logout" => log_out(&mut ctx),
            "rename" => rename(&mut ctx, args),
            "users" => list_users(&ctx),
            "contacts" => contact_commands::list(&mut ctx),
            "select" => contact_commands::select(&mut ctx, args),
            "back" => contact_commands::unselect(&mut ctx),
            "add" => contact_commands::add(&mut ctx),
            "edit" => contact_commands::edit(&mut ctx),
            "delete" => contact_commands::delete(&mut ctx),
            "width" => contact_commands::width(&mut ctx, args),
            "board" => task_commands::board(&mut ctx),
            "task" => dispatch_task(&mut ctx, args),
            _ => println!("Unknown command: {}. Type 'help'.", command),
        }
    }
}

fn dispatch_task(ctx: &mut CliContext, args: &str) {
    let (sub, rest) = match args.split_once(' ') {
        Some((s, r)) => (s, r.trim()),
        None => (args, ""),
    };
    match sub {
        "add" => task_commands::add(ctx),
        "list" => task_commands::list(ctx),
        "move" => task_commands::move_task(ctx, rest),
        "check" => task_commands::check(ctx, rest),
        _ => println!("Usage: task <add|list|move|check>"),
    }
}

fn print_help() {
    println!("Account:");
    println!("  signup               Create an account (uid simulates the auth provider)");
    println!("  login <uid>          Open the contacts view for a user");
    println!("  logout               Close the view and release its subscription");
    println!("  rename [name]        Change the logged-in user's name");
    println!("  users                List registered users");
    println!();
    println!("Contacts:");
    println!("  contacts             Sorted contact list with letter sections");
    println!("  select <index>       Toggle-select a contact, show details");
    println!("  back                 Clear selection");
    println!("  add | edit | delete  Contact form operations");
    println!("  width <px>           Apply the responsive layout policy");
    println!();
    println!("Board:");
    println!("  board                Tasks by column");
    println!("  task add             Create a task");
    println!("  task list            Numbered task list with subtasks");
    println!("  task move <n> <col>  Move task (todo|progress|feedback|done)");
    println!("  task check <n> <s>   Toggle a subtask");
}

fn sign_up(ctx: &mut CliContext) {
    let Some(name) = ctx.prompt("Name: ") else { return };
    let Some(email) = ctx.prompt("Email: ") else { return };
    let Some(uid) = ctx.prompt("Provider uid: ") else { return };

    match user_ops::sign_up(&ctx.service, &uid, &name, &email) {
        Ok(user) => println!("Signed up {}. Log in with: login {}", user.name, user.uid),
        Err(e) => ctx.print_error(&e),
    }
}

fn log_in(ctx: &mut CliContext, args: &str) {
    let uid = args.trim();
    if uid.is_empty() {
        println!("Usage: login <uid>");
        return;
    }

    match ContactsView::activate(&ctx.service, &Uid::new(uid)) {
        Ok(view) => {
            println!("Welcome back, {}!", view.current_user().name);
            ctx.view = Some(view);
        }
        Err(e) => ctx.print_error(&e),
    }
}

fn rename(ctx: &mut CliContext, args: &str) {
    let Some(view) = ctx.view.as_ref() else {
        println!("Log in first.");
        return;
    };
    let uid = view.current_user().uid.clone();

    let name = if args.is_empty() {
        match ctx.prompt("New name: ") {
            Some(n) => n,
            None => return,
        }
    } else {
        args.to_string()
    };

    match user_ops::rename_user(&ctx.service, &uid, &name) {
        Ok(user) => println!("Renamed to {}.", user.name),
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    }

    // The rename went through the store, so the view picks it up like any
    // other roster change.
    if let Some(view) = ctx.view.as_mut() {
        if let Err(e) = view.poll(&ctx.service) {
            ctx.print_error(&e);
        }
    }
}

fn log_out(ctx: &mut CliContext) {
    // Dropping the view releases its roster subscription.
    ctx.view = None;
    println!("Logged out.");
}

fn list_users(ctx: &CliContext) {
    match ctx.service.users() {
        Ok(users) => {
            for user in users {
                println!("{}  {}", user.uid, user.name);
            }
        }
        Err(e) => ctx.print_error(&e),
    }
}
