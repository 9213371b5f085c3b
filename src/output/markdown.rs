//! Markdown gallery generation for README embedding.
//!
//! Pure text rendering: the command layer decides where the lines go.

/// Render a Markdown gallery for a set of screenshot filenames
///
/// **Public** - main entry point for Markdown generation
///
/// # Arguments
/// * `dir_label` - path segment image links are written against (the
///   output directory's name, e.g. `screenshots`)
/// * `files` - screenshot filenames in the order they should appear
///
/// # Example
/// ```ignore
/// let files = list_screenshots(&dir)?;
/// let markdown = render_gallery("screenshots", &files);
/// println!("{markdown}");
/// ```
pub fn render_gallery(dir_label: &str, files: &[String]) -> String {
    let mut markdown = String::from("## Screenshots\n\n");

    for filename in files {
        markdown.push_str(&format!(
            "![{}]({}/{})\n\n",
            alt_text(filename),
            dir_label,
            filename
        ));
    }

    markdown
}

/// Derive image alt text from a screenshot filename
///
/// Strips the extension, replaces underscores with spaces, and
/// title-cases each word: `main_view_20240305_143009_123.png` becomes
/// `Main View 20240305 143009 123`.
pub fn alt_text(filename: &str) -> String {
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(filename);

    title_case(&stem.replace('_', " "))
}

/// Uppercase the first letter of every space-separated word, lowercase the rest
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
