//! JSDoc typedef writer.

use super::{finish_document, SchemaWriter};
use crate::error::Result;
use crate::outline::{AnatomyOutline, ComponentOutline};
use crate::scalar::{property_key, string_literal};
use anatomy_core::ComponentSet;

/// Writer for JSDoc `@typedef` comment blocks.
pub struct JsDocWriter;

impl JsDocWriter {
    /// Create a new JSDoc writer.
    pub fn new() -> Self {
        Self
    }

    fn component_blocks(&self, outline: &ComponentOutline) -> Vec<String> {
        let name = &outline.type_name;
        let mut blocks = Vec::new();

        if !outline.props.is_empty() {
            let entries = outline
                .props
                .iter()
                .map(|(prop, mapped)| format!("@property {} {}", mapped.jsdoc(), property_key(prop)))
                .collect();
            blocks.push(typedef(&format!("{name}Props"), entries));
        }

        match &outline.anatomy {
            AnatomyOutline::None => {}
            AnatomyOutline::Elements(entries) => {
                let entries = entries
                    .iter()
                    .map(|entry| {
                        let element_type = if entry.element_type.is_empty() {
                            "string".to_string()
                        } else {
                            string_literal(&entry.element_type)
                        };
                        format!(
                            "@property {{{}}} {} - {}",
                            element_type,
                            property_key(&entry.name),
                            entry.path_list()
                        )
                    })
                    .collect();
                blocks.push(typedef(&format!("{name}Anatomy"), entries));
            }
            AnatomyOutline::Rendered(text) => {
                let mut body = vec![format!("{name}Anatomy"), String::new()];
                body.extend(text.split('\n').map(str::to_string));
                blocks.push(comment_block(&body));
            }
        }

        if !outline.styles.is_empty() {
            let mut entries = Vec::new();
            for (element, attributes) in &outline.styles {
                let element = property_key(element);
                entries.push(format!("@property {{Object}} {element}"));
                for (attribute, style_type) in attributes {
                    entries.push(format!(
                        "@property {} [{element}.{}]",
                        style_type.jsdoc(),
                        property_key(attribute)
                    ));
                }
            }
            blocks.push(typedef(&format!("{name}Styles"), entries));
        }

        if !outline.tokens.is_empty() {
            let mut entries = Vec::new();
            for (element, bindings) in &outline.tokens {
                let element = property_key(element);
                entries.push(format!("@property {{Object}} {element}"));
                for (key, reference) in bindings {
                    entries.push(format!(
                        "@property {{string}} {element}.{} - {reference}",
                        property_key(key)
                    ));
                }
            }
            blocks.push(typedef(&format!("{name}Tokens"), entries));
        }

        blocks
    }
}

impl Default for JsDocWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaWriter for JsDocWriter {
    fn name(&self) -> &'static str {
        "jsdoc"
    }

    fn aliases(&self) -> &[&'static str] {
        &["js"]
    }

    fn extension(&self) -> &'static str {
        "js"
    }

    fn write(&self, components: &ComponentSet) -> Result<String> {
        let blocks = components
            .iter()
            .flat_map(|(name, metadata)| self.component_blocks(&ComponentOutline::new(name, metadata)))
            .collect();
        Ok(finish_document(blocks))
    }
}

fn typedef(name: &str, entries: Vec<String>) -> String {
    let mut body = vec![format!("@typedef {{Object}} {name}")];
    body.extend(entries);
    comment_block(&body)
}

/// Wrap lines in `/** ... */`, keeping the comment closed.
fn comment_block(body: &[String]) -> String {
    let mut lines = vec!["/**".to_string()];
    for line in body {
        let line = line.replace("*/", "*\\/");
        if line.is_empty() {
            lines.push(" *".to_string());
        } else {
            lines.push(format!(" * {line}"));
        }
    }
    lines.push(" */".to_string());
    lines.join("\n")
}
