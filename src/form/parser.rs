use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Text(String),
    Voice(String),
    Lang(String),
    Speed(String),
    Show,
    Voices,
    Submit,
    Play,
    Save(Option<String>),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

lazy_static! {
    static ref COMMAND_REGEX: Regex = Regex::new(
        r"(?xs)
        ^\s*
        ([A-Za-z]+)      # Command name
        (?:\s+(.*?))?    # Optional argument, rest of the line
        \s*$
        "
    )
    .unwrap();
}

pub fn parse(line: &str) -> Command {
    if line.trim().is_empty() {
        return Command::Empty;
    }

    let Some(cap) = COMMAND_REGEX.captures(line) else {
        return Command::Invalid(format!("Cannot parse '{}', type 'help'", line.trim()));
    };

    let name = cap[1].to_lowercase();
    let arg = cap
        .get(2)
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.is_empty());

    match (name.as_str(), arg) {
        // An empty `text` clears the field
        ("text", arg) => Command::Text(arg.unwrap_or_default()),
        ("voice", Some(id)) => Command::Voice(id),
        ("lang", Some(code)) => Command::Lang(code),
        ("speed", Some(value)) => Command::Speed(value),
        ("voice" | "lang" | "speed", None) => {
            Command::Invalid(format!("'{}' needs a value", name))
        }
        ("show", _) => Command::Show,
        ("voices", _) => Command::Voices,
        ("submit" | "go", _) => Command::Submit,
        ("play", _) => Command::Play,
        ("save", dir) => Command::Save(dir),
        ("help", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        (other, _) => Command::Invalid(format!("Unknown command '{}', type 'help'", other)),
    }
}
