//! Semicolon-delimited command syntax: `template;top caption;bottom caption`

/// Separator between the template reference and the captions
pub const FIELD_SEPARATOR: char = ';';

/// A request to render a template with up to two captions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub raw_text: String,
    pub template_ref: String,
    pub caption_top: String,
    pub caption_bottom: String,
}

/// What the requester asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show usage
    Help,
    /// Show the template listing
    List,
    /// Captions were given but no template (e.g. `;top;bottom`)
    MissingTemplate,
    Generate(ParsedCommand),
}

/// Parse the raw slash-command text.
///
/// The text is split on `;` and each field is trimmed. Directives are only
/// recognised when there is a single field. Fields past the third are ignored.
pub fn parse_command(text: &str) -> Command {
    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).map(str::trim).collect();

    if let [single] = fields.as_slice() {
        match *single {
            "" | "help" => return Command::Help,
            "list" | "templates" => return Command::List,
            _ => {}
        }
    }

    let field = |index: usize| fields.get(index).copied().unwrap_or_default().to_string();
    let template_ref = field(0);
    if template_ref.is_empty() {
        return Command::MissingTemplate;
    }

    Command::Generate(ParsedCommand {
        raw_text: text.to_string(),
        template_ref,
        caption_top: field(1),
        caption_bottom: field(2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(text: &str) -> ParsedCommand {
        match parse_command(text) {
            Command::Generate(parsed) => parsed,
            other => panic!("expected Generate for {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_and_blank_are_help() {
        assert_eq!(parse_command(""), Command::Help);
        assert_eq!(parse_command("   \t "), Command::Help);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("  help  "), Command::Help);
    }

    #[test]
    fn test_listing_directives() {
        assert_eq!(parse_command("list"), Command::List);
        assert_eq!(parse_command("templates"), Command::List);
        assert_eq!(parse_command(" list\t"), Command::List);
    }

    #[test]
    fn test_directive_words_with_captions_are_templates() {
        let parsed = generate("list;a;b");
        assert_eq!(parsed.template_ref, "list");
        assert_eq!(parsed.caption_top, "a");
    }

    #[test]
    fn test_full_command() {
        let parsed = generate("drake;hello;world");
        assert_eq!(parsed.raw_text, "drake;hello;world");
        assert_eq!(parsed.template_ref, "drake");
        assert_eq!(parsed.caption_top, "hello");
        assert_eq!(parsed.caption_bottom, "world");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let parsed = generate(" drake ;\thello there ; world\t");
        assert_eq!(parsed.template_ref, "drake");
        assert_eq!(parsed.caption_top, "hello there");
        assert_eq!(parsed.caption_bottom, "world");
    }

    #[test]
    fn test_missing_captions_default_to_empty() {
        let parsed = generate("drake");
        assert_eq!(parsed.caption_top, "");
        assert_eq!(parsed.caption_bottom, "");

        let parsed = generate("drake;only top");
        assert_eq!(parsed.caption_top, "only top");
        assert_eq!(parsed.caption_bottom, "");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let parsed = generate("drake;a;b;c;d");
        assert_eq!(parsed.caption_bottom, "b");
    }

    #[test]
    fn test_url_reference_kept_verbatim() {
        let parsed = generate("https://example.com/x.png;top;bottom");
        assert_eq!(parsed.template_ref, "https://example.com/x.png");
    }

    #[test]
    fn test_missing_template() {
        assert_eq!(parse_command(";top;bottom"), Command::MissingTemplate);
        assert_eq!(parse_command(" ; "), Command::MissingTemplate);
    }
}
