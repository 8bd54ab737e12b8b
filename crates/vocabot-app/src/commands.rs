/// A recognised bot command with its raw arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Random batch
    Start,
    /// Arguments joined with single spaces, possibly empty
    Search(String),
    /// First argument, if any
    Page(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incoming {
    Command(Command),
    /// A command we don't handle, or one addressed to another bot
    Ignored,
    /// Plain text, answered with the help menu
    Text,
}

/// Classify a message text. `bot_username` is lowercase without '@'.
pub fn parse(text: &str, bot_username: &str) -> Incoming {
    let Some(rest) = text.strip_prefix('/') else {
        return Incoming::Text;
    };

    // The command name must follow the slash directly
    let head_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
    if head_len == 0 {
        return Incoming::Text;
    }
    let (head, args) = rest.split_at(head_len);
    let mut words = args.split_whitespace();

    let (name, target) = match head.split_once('@') {
        Some((name, target)) => (name, Some(target)),
        None => (head, None),
    };

    if let Some(target) = target
        && !target.eq_ignore_ascii_case(bot_username)
    {
        return Incoming::Ignored;
    }

    let command = match name.to_ascii_lowercase().as_str() {
        "start" => Command::Start,
        "search" => Command::Search(words.collect::<Vec<_>>().join(" ")),
        "page" => Command::Page(words.next().map(str::to_string)),
        _ => return Incoming::Ignored,
    };

    Incoming::Command(command)
}

/// Parse a page argument. Only plain ASCII digits are accepted; a number
/// too large for `usize` saturates so it lands out of range.
pub fn parse_page_number(arg: &str) -> Option<usize> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(arg.parse().unwrap_or(usize::MAX))
}
