//! Line-based command scripts for `tl run`.
//!
//! ```text
//! # comments and blank lines are skipped
//! add Buy milk
//! check 1
//! edit 1
//! commit Buy oat milk
//! delete 1
//! ```

/// One parsed script line. Ids stay raw strings; the collection normalizes
/// them on lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Add(String),
    Check(String),
    Uncheck(String),
    Toggle(String),
    ClearChecked,
    Edit(String),
    Commit(String),
    Cancel,
    Delete(String),
}

/// Error type for script parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("{0} needs an item id")]
    MissingId(&'static str),
    #[error("{0} takes no arguments")]
    UnexpectedArgument(&'static str),
}

/// Parse one line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let command = match word {
        // free text keeps its inner and trailing spaces; only the separator goes
        "add" => ScriptCommand::Add(rest.to_string()),
        "commit" => ScriptCommand::Commit(rest.to_string()),
        "check" => ScriptCommand::Check(id_arg("check", rest)?),
        "uncheck" => ScriptCommand::Uncheck(id_arg("uncheck", rest)?),
        "toggle" => ScriptCommand::Toggle(id_arg("toggle", rest)?),
        "edit" => ScriptCommand::Edit(id_arg("edit", rest)?),
        "delete" => ScriptCommand::Delete(id_arg("delete", rest)?),
        "clear-checked" => {
            no_args("clear-checked", rest)?;
            ScriptCommand::ClearChecked
        }
        "cancel" => {
            no_args("cancel", rest)?;
            ScriptCommand::Cancel
        }
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn id_arg(command: &'static str, rest: &str) -> Result<String, ScriptError> {
    let id = rest.trim();
    if id.is_empty() {
        Err(ScriptError::MissingId(command))
    } else {
        Ok(id.to_string())
    }
}

fn no_args(command: &'static str, rest: &str) -> Result<(), ScriptError> {
    if rest.trim().is_empty() {
        Ok(())
    } else {
        Err(ScriptError::UnexpectedArgument(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_and_comments() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# add nothing"), Ok(None));
        assert_eq!(parse_line("  # indented"), Ok(None));
    }

    #[test]
    fn add_keeps_text() {
        assert_eq!(
            parse_line("add Buy  milk "),
            Ok(Some(ScriptCommand::Add("Buy  milk ".into())))
        );
        assert_eq!(parse_line("add"), Ok(Some(ScriptCommand::Add(String::new()))));
        assert_eq!(
            parse_line("add Buy milk\r"),
            Ok(Some(ScriptCommand::Add("Buy milk".into())))
        );
    }

    #[test]
    fn id_commands() {
        assert_eq!(
            parse_line("check 1"),
            Ok(Some(ScriptCommand::Check("1".into())))
        );
        assert_eq!(
            parse_line("delete  007 "),
            Ok(Some(ScriptCommand::Delete("007".into())))
        );
        assert_eq!(
            parse_line("toggle 2"),
            Ok(Some(ScriptCommand::Toggle("2".into())))
        );
        assert_eq!(parse_line("edit"), Err(ScriptError::MissingId("edit")));
        assert_eq!(parse_line("uncheck  "), Err(ScriptError::MissingId("uncheck")));
    }

    #[test]
    fn bare_commands() {
        assert_eq!(parse_line("cancel"), Ok(Some(ScriptCommand::Cancel)));
        assert_eq!(
            parse_line("clear-checked"),
            Ok(Some(ScriptCommand::ClearChecked))
        );
        assert_eq!(
            parse_line("cancel now"),
            Err(ScriptError::UnexpectedArgument("cancel"))
        );
    }

    #[test]
    fn unknown_command() {
        let err = parse_line("remove 1").unwrap_err();
        assert_eq!(err, ScriptError::UnknownCommand("remove".into()));
        assert_eq!(err.to_string(), "unknown command \"remove\"");
    }
}
