use colored::*;

pub fn header(text: &str) -> String {
    text.bright_cyan().bold().to_string()
}

pub fn info(text: &str) -> String {
    text.blue().to_string()
}

pub fn warning(text: &str) -> String {
    text.yellow().to_string()
}

pub fn error(text: &str) -> String {
    text.red().bold().to_string()
}

pub fn prompt(text: &str) -> String {
    text.yellow().bold().to_string()
}
