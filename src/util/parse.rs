use serenity::all::RoleId;

use crate::error::command::CommandError;

/// Splits a command body into arguments.
///
/// Arguments are separated by whitespace. A double-quoted span is kept as a single
/// argument with the quotes removed, so `"Dummy CTF" pwn` yields `Dummy CTF` and
/// `pwn`. An unterminated quote runs to the end of the input.
///
/// # Arguments
/// - `body` - Message content after the prefix and command name
///
/// # Returns
/// - `Vec<String>` - The arguments in order; empty quoted spans yield empty arguments
pub fn split_arguments(body: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in body.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if has_token {
        args.push(current);
    }

    args
}

/// Parses a role ID argument.
///
/// Accepts a raw snowflake (`123`) or a role mention (`<@&123>`).
///
/// # Arguments
/// - `value` - The argument to parse
///
/// # Returns
/// - `Ok(RoleId)` - Successfully parsed, non-zero role ID
/// - `Err(CommandError::InvalidRoleId)` - Not a number, or zero
pub fn parse_role_id(value: &str) -> Result<RoleId, CommandError> {
    let raw = value
        .strip_prefix("<@&")
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(value);

    match raw.parse::<u64>() {
        Ok(id) if id != 0 => Ok(RoleId::new(id)),
        _ => Err(CommandError::InvalidRoleId(value.to_string())),
    }
}
