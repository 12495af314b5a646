//! Line grammar of the interactive session.

use std::fmt;
use std::str::FromStr;

/// A form input the session can write to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    BusinessId,
    Url,
    Template,
    Task,
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "business_id" | "business-id" | "id" => Ok(Self::BusinessId),
            "url" => Ok(Self::Url),
            "template" | "template_json" => Ok(Self::Template),
            "task" => Ok(Self::Task),
            other => Err(ParseError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BusinessId => "business_id",
            Self::Url => "url",
            Self::Template => "template",
            Self::Task => "task",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Go(String),
    /// Replace the input in one change.
    Set { field: Field, value: String },
    /// Clear the input, then enter the value one character at a time.
    Type { field: Field, value: String },
    Confirm,
    Submit,
    Show,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownCommand(String),
    UnknownField(String),
    MissingArgument(&'static str),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty command"),
            Self::UnknownCommand(name) => write!(f, "unknown command '{name}' (try 'help')"),
            Self::UnknownField(name) => write!(
                f,
                "unknown field '{name}' (expected business_id, url, template, or task)"
            ),
            Self::MissingArgument(what) => write!(f, "missing {what}"),
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
go <path>              open a page (/, /audit, /consent, /checklist)
set <field> <value>    replace an input (business_id, url, template, task)
type <field> <value>   clear an input, then enter the value one character at a time
confirm                leave the business id input (checklist on_confirm)
submit                 submit the page's form
show                   print the page again
help                   print this help
quit                   leave the session";

impl FromStr for SessionCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();

        match name {
            "" => Err(ParseError::Empty),
            "go" | "open" => {
                if rest.is_empty() {
                    return Err(ParseError::MissingArgument("path"));
                }
                Ok(Self::Go(rest.to_string()))
            }
            "set" | "type" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(ParseError::MissingArgument("field"));
                }
                let field = field.parse()?;
                let value = value.to_string();
                if name == "set" {
                    Ok(Self::Set { field, value })
                } else {
                    Ok(Self::Type { field, value })
                }
            }
            "confirm" | "blur" => Ok(Self::Confirm),
            "submit" => Ok(Self::Submit),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("go /checklist", SessionCommand::Go("/checklist".into()))]
    #[case("  show  ", SessionCommand::Show)]
    #[case("submit", SessionCommand::Submit)]
    #[case("blur", SessionCommand::Confirm)]
    #[case("quit", SessionCommand::Quit)]
    #[case(
        "set business_id acme",
        SessionCommand::Set { field: Field::BusinessId, value: "acme".into() }
    )]
    #[case(
        "type id b1",
        SessionCommand::Type { field: Field::BusinessId, value: "b1".into() }
    )]
    #[case(
        "set template {\"a\": 1}",
        SessionCommand::Set { field: Field::Template, value: "{\"a\": 1}".into() }
    )]
    #[case(
        "set task Add cookie banner",
        SessionCommand::Set { field: Field::Task, value: "Add cookie banner".into() }
    )]
    #[case("set url", SessionCommand::Set { field: Field::Url, value: String::new() })]
    fn parses(#[case] line: &str, #[case] expected: SessionCommand) {
        assert_eq!(line.parse::<SessionCommand>().unwrap(), expected);
    }

    #[rstest]
    #[case("", ParseError::Empty)]
    #[case("go", ParseError::MissingArgument("path"))]
    #[case("set", ParseError::MissingArgument("field"))]
    #[case("set colour red", ParseError::UnknownField("colour".into()))]
    #[case("dance", ParseError::UnknownCommand("dance".into()))]
    fn rejects(#[case] line: &str, #[case] expected: ParseError) {
        assert_eq!(line.parse::<SessionCommand>().unwrap_err(), expected);
    }
}
