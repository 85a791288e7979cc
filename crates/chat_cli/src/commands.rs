use chat_core::samples::sample_prompt;

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text to submit.
    Say(String),
    /// Submit the canned prompt at this 1-based position.
    Sample(usize),
    Samples,
    Toggle,
    Cancel,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Say(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("quit" | "exit"), None) => Command::Quit,
        (Some("toggle"), None) => Command::Toggle,
        (Some("samples"), None) => Command::Samples,
        (Some("cancel"), None) => Command::Cancel,
        (Some("help"), None) => Command::Help,
        (Some("sample"), Some(n)) => match n.parse::<usize>() {
            Ok(position) if sample_prompt(position).is_some() => Command::Sample(position),
            _ => Command::Unknown(trimmed.to_string()),
        },
        _ => Command::Unknown(trimmed.to_string()),
    }
}

pub const HELP: &str = "\
Type a message and press Enter to send it.
  /samples     list canned prompts
  /sample N    send canned prompt N
  /toggle      collapse or expand the chat
  /cancel      give up on the pending reply
  /quit        leave";
