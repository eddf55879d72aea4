//! # Feature: Help Menu
//!
//! Renders the command registry into paginated embed pages, one category per
//! page (large categories spill onto follow-up pages). The pages feed the
//! select paginator, so readers can jump straight to a category.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.3.0

use serenity::builder::CreateEmbed;

use crate::commands::registry::CommandRegistry;
use crate::commands::spec::CommandSpec;
use crate::components::PageEntry;
use crate::core::truncate_for_embed;
use crate::features::extensions::ExtensionConfig;
use crate::features::sync::snapshot::{CommandKind, OptionKind};

/// Embed accent color shared by all help pages
const ACCENT_COLOR: u32 = 0x5865F2;
/// Commands listed per page
const COMMANDS_PER_PAGE: usize = 5;
/// Select option descriptions are capped by Discord
const ENTRY_DESCRIPTION_LIMIT: usize = 100;

/// Build the full set of help pages for the paginator
///
/// Registry categories come first in declaration order; loaded extensions are
/// appended as one synthetic category.
pub fn build_help_pages(
    registry: &CommandRegistry,
    extensions: &[ExtensionConfig],
) -> Vec<(CreateEmbed, PageEntry)> {
    let mut pages = Vec::new();

    for category in registry.categories() {
        let specs: Vec<&CommandSpec> = category.specs.iter().collect();
        pages.extend(category_pages(&category.name, &category.description, &specs));
    }

    let extension_specs: Vec<CommandSpec> = extensions
        .iter()
        .flat_map(ExtensionConfig::specs)
        .collect();
    if !extension_specs.is_empty() {
        let refs: Vec<&CommandSpec> = extension_specs.iter().collect();
        pages.extend(category_pages(
            "Extensions",
            "Commands declared by loaded extension manifests",
            &refs,
        ));
    }

    pages
}

fn category_pages(
    name: &str,
    description: &str,
    specs: &[&CommandSpec],
) -> Vec<(CreateEmbed, PageEntry)> {
    let chunks: Vec<&[&CommandSpec]> = specs.chunks(COMMANDS_PER_PAGE).collect();
    let total = chunks.len().max(1);

    chunks
        .iter()
        .enumerate()
        .map(|(page_number, chunk)| {
            let title = if total > 1 {
                format!("{name} Commands ({}/{total})", page_number + 1)
            } else {
                format!("{name} Commands")
            };

            let mut embed = CreateEmbed::default();
            embed.title(&title);
            embed.description(truncate_for_embed(&format!("*{description}*")));
            embed.color(ACCENT_COLOR);
            for spec in chunk.iter() {
                embed.field(signature(spec), field_body(spec), false);
            }

            let entry = PageEntry {
                title,
                description: Some(clip(description, ENTRY_DESCRIPTION_LIMIT)),
            };
            (embed, entry)
        })
        .collect()
}

/// Short invocation line shown as the field name
fn signature(spec: &CommandSpec) -> String {
    match spec.kind {
        CommandKind::User => return format!("{} (user menu)", spec.name),
        CommandKind::Message => return format!("{} (message menu)", spec.name),
        CommandKind::ChatInput => {}
    }

    let mut sig = format!("/{}", spec.name);
    if spec
        .options
        .iter()
        .any(|opt| matches!(opt.kind, OptionKind::SubCommand | OptionKind::SubCommandGroup))
    {
        sig.push_str(" <subcommand>");
        return sig;
    }
    for opt in &spec.options {
        if opt.required {
            sig.push_str(&format!(" <{}>", opt.name));
        } else {
            sig.push_str(&format!(" [{}]", opt.name));
        }
    }
    sig
}

/// Description plus one line per parameter or subcommand
fn field_body(spec: &CommandSpec) -> String {
    let mut body = if spec.description.is_empty() {
        "No description provided.".to_string()
    } else {
        spec.description.clone()
    };
    for opt in &spec.options {
        match opt.kind {
            OptionKind::SubCommand | OptionKind::SubCommandGroup => {
                body.push_str(&format!("\n`{}` - {}", opt.name, opt.description));
            }
            _ => {
                let marker = if opt.required { "required" } else { "optional" };
                body.push_str(&format!("\n`{}` ({marker}) - {}", opt.name, opt.description));
            }
        }
    }
    body
}

fn clip(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }
    let mut end = limit;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::spec::OptionSpec;

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.add_category(
            "General",
            "Everyday commands",
            vec![
                CommandSpec::chat("ping", "Get the bot's latency"),
                CommandSpec::chat("echo", "Echo a message")
                    .option(OptionSpec::string("message", "What to echo").required(true)),
                CommandSpec::chat("math", "Math commands")
                    .option(OptionSpec::sub_command("add", "Add two numbers")),
                CommandSpec::user_menu("User Ping"),
                CommandSpec::chat("a", "a"),
                CommandSpec::chat("b", "b"),
            ],
        );
        registry.add_category("Admin", "Guild management", vec![
            CommandSpec::chat("sync", "Republish commands"),
        ]);
        registry
    }

    #[test]
    fn test_large_category_spills_over() {
        let pages = build_help_pages(&registry(), &[]);
        // General has 6 commands -> 2 pages, Admin 1 page
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].1.title, "General Commands (1/2)");
        assert_eq!(pages[1].1.title, "General Commands (2/2)");
        assert_eq!(pages[2].1.title, "Admin Commands");
    }

    #[test]
    fn test_signatures() {
        assert_eq!(
            signature(&CommandSpec::chat("ping", "d")),
            "/ping"
        );
        assert_eq!(
            signature(
                &CommandSpec::chat("echo", "d")
                    .option(OptionSpec::string("message", "d").required(true))
                    .option(OptionSpec::boolean("loud", "d"))
            ),
            "/echo <message> [loud]"
        );
        assert_eq!(
            signature(
                &CommandSpec::chat("math", "d")
                    .option(OptionSpec::sub_command("add", "d"))
            ),
            "/math <subcommand>"
        );
        assert_eq!(signature(&CommandSpec::user_menu("User Ping")), "User Ping (user menu)");
    }

    #[test]
    fn test_extension_category_appended() {
        let manifest = "name: greet\ndescription: test\ncommands:\n  - name: greet\n    description: Greet someone\n    response: hi\n";
        let extension = ExtensionConfig::parse(manifest).unwrap();
        let pages = build_help_pages(&registry(), &[extension]);
        assert_eq!(pages.last().unwrap().1.title, "Extensions Commands");
    }

    #[test]
    fn test_entry_description_clipped() {
        let mut registry = CommandRegistry::new();
        registry.add_category("Long", &"d".repeat(300), vec![CommandSpec::chat("x", "y")]);
        let pages = build_help_pages(&registry, &[]);
        assert!(pages[0].1.description.as_ref().unwrap().len() <= 100);
    }
}
