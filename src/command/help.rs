use crate::command::Command;

/// Renders the usage of every command, grouped by help section.
///
/// # Arguments
/// - `prefix` - Configured command prefix, shown in the header
///
/// # Returns
/// - `String` - Markdown message with one code block per section
pub fn render(prefix: &str) -> String {
    let mut message = format!("Commands (prefix `{}`):", prefix);
    let mut current_group = "";

    for command in Command::ALL {
        let group = command.group();
        if group != current_group {
            if !current_group.is_empty() {
                message.push_str("```");
            }
            message.push_str(&format!("\n**{}**\n```\n", group));
            current_group = group;
        }
        message.push_str(command.usage());
        message.push('\n');
    }

    if !current_group.is_empty() {
        message.push_str("```");
    }

    message
}
