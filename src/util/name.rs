/// Suffix distinguishing a CTF's solved category from its main category.
pub const SOLVED_SUFFIX: &str = "-solved";

/// Normalizes a CTF, challenge or channel name.
///
/// Lowercases the name and replaces spaces and underscores with hyphens, matching
/// how Discord itself renders text channel names. Every lookup and every creation
/// goes through this function first so that `My CTF`, `my_ctf` and `my-ctf` all
/// refer to the same workspace.
///
/// # Arguments
/// - `name` - Raw name as typed by the user
///
/// # Returns
/// - `String` - The normalized name
pub fn normalize(name: &str) -> String {
    name.to_lowercase().replace(['_', ' '], "-")
}

/// Name of the solved category belonging to a CTF.
///
/// # Arguments
/// - `name` - CTF name, normalized or not
///
/// # Returns
/// - `String` - `normalize(name)` followed by `-solved`
pub fn solved_category_name(name: &str) -> String {
    format!("{}{}", normalize(name), SOLVED_SUFFIX)
}

/// Strips the solved suffix from a category name, yielding the CTF name.
///
/// Main category names are returned unchanged.
pub fn ctf_name_of_category(category_name: &str) -> &str {
    category_name
        .strip_suffix(SOLVED_SUFFIX)
        .unwrap_or(category_name)
}
