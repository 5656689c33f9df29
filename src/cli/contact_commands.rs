use crate::contacts::{merge, ContactDraft, OverlayMode};
use crate::layout::LayoutMode;

use super::context::CliContext;

/// Print the sorted contact list with its alphabetical section headers.
/// Headers are derived lazily from the flat sorted sequence.
pub fn list(ctx: &mut CliContext) {
    let Some(view) = ctx.view.as_mut() else {
        println!("Log in first.");
        return;
    };

    if let Err(e) = view.poll(&ctx.service) {
        println!("Error: {}", e);
        return;
    }

    let sorted = view.sorted_contacts();
    if sorted.is_empty() {
        println!("No contacts.");
        return;
    }

    for (index, contact) in sorted.iter().enumerate() {
        if merge::starts_new_letter(sorted, index) {
            println!("--- {} ---", merge::first_letter(contact));
        }
        let marker = if view.selection() == Some(index) { ">" } else { " " };
        println!("{} [{}] {}", marker, index, contact.name);
    }
}

/// Toggle-select a contact by its index in the sorted list and show its
/// details while selected.
pub fn select(ctx: &mut CliContext, args: &str) {
    let Some(view) = ctx.view.as_mut() else {
        println!("Log in first.");
        return;
    };

    let Ok(index) = args.trim().parse::<usize>() else {
        println!("Usage: select <index>");
        return;
    };
    if index >= view.sorted_contacts().len() {
        println!("No contact at index {}", index);
        return;
    }

    view.select_contact(index);
    match view.selected_contact() {
        Some(contact) => {
            println!("{}", contact.name);
            println!("  badge color: {}", contact.color);
            if let Some(email) = &contact.email {
                println!("  email: {}", email);
            }
            if let Some(phone) = &contact.phone {
                println!("  phone: {}", phone);
            }
        }
        None => println!("Selection cleared."),
    }
}

pub fn unselect(ctx: &mut CliContext) {
    match ctx.view.as_mut() {
        Some(view) => view.unselect_contact(),
        None => println!("Log in first."),
    }
}

pub fn add(ctx: &mut CliContext) {
    if ctx.view.is_none() {
        println!("Log in first.");
        return;
    }

    let Some(name) = ctx.prompt("Name: ") else { return };
    let email = ctx.prompt_optional("Email (optional): ");
    let phone = ctx.prompt_optional("Phone (optional): ");

    let draft = ContactDraft { name, email, phone };
    let Some(view) = ctx.view.as_mut() else { return };
    view.open_overlay(OverlayMode::Add);
    match view.submit_contact(&ctx.service, &draft) {
        Ok(()) => println!("Contact added."),
        Err(e) => {
            view.cancel_overlay();
            println!("Error: {}", e);
        }
    }
}

pub fn edit(ctx: &mut CliContext) {
    let Some(view) = ctx.view.as_ref() else {
        println!("Log in first.");
        return;
    };
    let Some(current) = view.selected_contact().cloned() else {
        println!("Select a contact first.");
        return;
    };

    let name = ctx
        .prompt_optional(&format!("Name [{}]: ", current.name))
        .unwrap_or(current.name);
    let email = ctx
        .prompt_optional("Email (blank keeps current): ")
        .or(current.email);
    let phone = ctx
        .prompt_optional("Phone (blank keeps current): ")
        .or(current.phone);

    let draft = ContactDraft { name, email, phone };
    let Some(view) = ctx.view.as_mut() else { return };
    view.open_overlay(OverlayMode::Edit);
    match view.submit_contact(&ctx.service, &draft) {
        Ok(()) => println!("Contact updated."),
        Err(e) => {
            view.cancel_overlay();
            println!("Error: {}", e);
        }
    }
}

pub fn delete(ctx: &mut CliContext) {
    let Some(view) = ctx.view.as_mut() else {
        println!("Log in first.");
        return;
    };
    match view.delete_selected_contact(&ctx.service) {
        Ok(()) => println!("Contact deleted."),
        Err(e) => println!("Error: {}", e),
    }
}

/// Feed a measured viewer width into the layout policy.
pub fn width(ctx: &mut CliContext, args: &str) {
    let Some(view) = ctx.view.as_mut() else {
        println!("Log in first.");
        return;
    };
    let Ok(px) = args.trim().parse::<u32>() else {
        println!("Usage: width <pixels>");
        return;
    };
    view.set_viewer_width(px);
    let mode = match view.layout() {
        LayoutMode::Desktop => "desktop",
        LayoutMode::Mobile => "mobile",
    };
    println!("Layout: {}", mode);
}
