use chrono::NaiveDate;

use crate::db::task_repo;
use crate::model::{Category, Priority, Task, TaskStatus};
use crate::ops::task_ops;
use crate::queries::board_queries;

use super::context::CliContext;

/// Print the board, one column per task status.
pub fn board(ctx: &mut CliContext) {
    let Some(view) = ctx.view.as_ref() else {
        println!("Log in first.");
        return;
    };
    let owner = view.current_user().uid.clone();

    match board_queries::tasks_by_status(ctx.service.conn(), &owner) {
        Ok(columns) => {
            for (status, tasks) in columns {
                println!("== {} ==", status.display_name());
                if tasks.is_empty() {
                    println!("  (empty)");
                }
                for task in tasks {
                    print_task_line(&task);
                }
            }
        }
        Err(e) => ctx.print_error(&e),
    }
}

fn print_task_line(task: &Task) {
    let prio = task
        .priority
        .map(|p| p.display_name())
        .unwrap_or("-");
    let (done, total) = task.subtask_progress();
    let progress = if total > 0 {
        format!(" [{}/{}]", done, total)
    } else {
        String::new()
    };
    println!("  {} ({}){}", task.title, prio, progress);
}

pub fn add(ctx: &mut CliContext) {
    let Some(view) = ctx.view.as_ref() else {
        println!("Log in first.");
        return;
    };
    let owner = view.current_user().uid.clone();

    let Some(title) = ctx.prompt("Title: ") else { return };
    let description = ctx.prompt_optional("Description (optional): ");
    let due_date = ctx
        .prompt_optional("Due date YYYY-MM-DD (optional): ")
        .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok());
    let priority = ctx
        .prompt_optional("Priority Urgent/Medium/Low (optional): ")
        .and_then(|s| Priority::from_db_str(&s));
    let category = match ctx
        .prompt_optional("Category technical/story (optional): ")
        .as_deref()
    {
        Some("technical") => Some(Category::TechnicalTask),
        Some("story") => Some(Category::UserStory),
        _ => None,
    };

    match task_ops::add_task(
        ctx.service.conn(),
        &owner,
        &title,
        description.as_deref(),
        due_date,
        priority,
        category,
        Vec::new(),
    ) {
        Ok(task) => {
            if let Some(names) = ctx.prompt_optional("Subtasks (comma-separated, optional): ") {
                for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
                    if let Err(e) = task_ops::add_subtask(ctx.service.conn(), &task.id, name) {
                        ctx.print_error(&e);
                    }
                }
            }
            println!("Task added to '{}'.", task.status.display_name());
        }
        Err(e) => ctx.print_error(&e),
    }
}

/// Move a task between columns: `task move <number> <todo|progress|feedback|done>`.
pub fn move_task(ctx: &mut CliContext, args: &str) {
    let mut parts = args.split_whitespace();
    let (Some(number), Some(column)) = (parts.next(), parts.next()) else {
        println!("Usage: task move <number> <todo|progress|feedback|done>");
        return;
    };
    let status = match column {
        "todo" => TaskStatus::ToDo,
        "progress" => TaskStatus::InProgress,
        "feedback" => TaskStatus::AwaitFeedback,
        "done" => TaskStatus::Done,
        _ => {
            println!("Unknown column: {}", column);
            return;
        }
    };

    let Some(task) = find_task(ctx, number) else { return };
    match task_ops::move_task(ctx.service.conn(), &task.id, status) {
        Ok(moved) => println!("'{}' moved to {}.", moved.title, status.display_name()),
        Err(e) => ctx.print_error(&e),
    }
}

/// List tasks with their numbers, for `task move` / `task check`.
pub fn list(ctx: &mut CliContext) {
    let Some(view) = ctx.view.as_ref() else {
        println!("Log in first.");
        return;
    };
    let owner = view.current_user().uid.clone();

    match task_repo::find_by_owner(ctx.service.conn(), &owner) {
        Ok(tasks) => {
            for (number, task) in tasks.iter().enumerate() {
                println!(
                    "[{}] {} — {}",
                    number,
                    task.title,
                    task.status.display_name()
                );
                for (i, subtask) in task.subtasks.iter().enumerate() {
                    let mark = if subtask.done { "x" } else { " " };
                    println!("    ({}) [{}] {}", i, mark, subtask.name);
                }
            }
        }
        Err(e) => ctx.print_error(&e),
    }
}

/// Toggle a subtask: `task check <number> <subtask>`.
pub fn check(ctx: &mut CliContext, args: &str) {
    let mut parts = args.split_whitespace();
    let (Some(number), Some(sub)) = (parts.next(), parts.next()) else {
        println!("Usage: task check <number> <subtask>");
        return;
    };
    let Ok(sub_index) = sub.parse::<usize>() else {
        println!("Usage: task check <number> <subtask>");
        return;
    };

    let Some(task) = find_task(ctx, number) else { return };
    match task_ops::toggle_subtask(ctx.service.conn(), &task.id, sub_index) {
        Ok(updated) => {
            let (done, total) = updated.subtask_progress();
            println!("'{}': {}/{} subtasks done.", updated.title, done, total);
        }
        Err(e) => ctx.print_error(&e),
    }
}

fn find_task(ctx: &CliContext, number: &str) -> Option<Task> {
    let view = ctx.view.as_ref()?;
    let owner = view.current_user().uid.clone();

    let Ok(index) = number.parse::<usize>() else {
        println!("Task number must be an integer.");
        return None;
    };
    match task_repo::find_by_owner(ctx.service.conn(), &owner) {
        Ok(mut tasks) => {
            if index < tasks.len() {
                Some(tasks.remove(index))
            } else {
                println!("No task number {}", index);
                None
            }
        }
        Err(e) => {
            ctx.print_error(&e);
            None
        }
    }
}
