use std::io::{self, Write};

use crate::contacts::ContactsView;
use crate::store::UsersService;

pub struct CliContext {
    pub service: UsersService,
    pub view: Option<ContactsView>,
}

impl CliContext {
    pub fn new(service: UsersService) -> Self {
        Self {
            service,
            view: None,
        }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Read a line, trimmed, empty mapped to None.
    pub fn prompt_optional(&self, prompt: &str) -> Option<String> {
        self.prompt(prompt).filter(|s| !s.is_empty())
    }

    /// Print an error.
    pub fn print_error(&self, e: &crate::error::JoinError) {
        println!("Error: {}", e);
    }
}
