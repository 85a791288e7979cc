use chat_core::{Message, Sender, SAMPLE_PROMPTS};
use colored::Colorize;

pub fn format_message(message: &Message) -> String {
    match message.sender() {
        Sender::User => format!("{} {}", "You:".bold().green(), message.text()),
        Sender::Bot => format!("{} {}", "Bot:".bold().cyan(), message.text()),
    }
}

pub fn print_thread(messages: &[Message]) {
    for message in messages {
        println!("{}", format_message(message));
    }
}

pub fn print_samples() {
    for (idx, prompt) in SAMPLE_PROMPTS.iter().enumerate() {
        println!("  {} {}", format!("{:>2}.", idx + 1).dimmed(), prompt);
    }
}

pub fn print_header() {
    println!("{}", "McGarry's Coastal Kitchen".bold().blue());
    println!("{}", "Type /help for commands.".dimmed());
}
