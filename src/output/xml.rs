use crate::snapshot::document::{Document, Element, PageInfo, Statistics};

const INDENT: &str = "  ";

// ============================================================================
// XML renderer — PageElements document
// ============================================================================

/// Render a snapshot as an indented XML document:
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <PageElements>
///   <PageInfo>
///     <timestamp>2024-05-01 10:00:00</timestamp>
///     <packageName>com.example</packageName>
///     <className>android.widget.FrameLayout</className>
///   </PageInfo>
///   <Hierarchy>
///     <Element className="android.widget.FrameLayout" ...>
///       <Actions>
///         <Action>CUSTOM_VALIDATE</Action>
///       </Actions>
///       <Element className="android.widget.Button" ... />
///     </Element>
///   </Hierarchy>
///   <Statistics>
///     <totalElements>2</totalElements>
///     <clickableElements>1</clickableElements>
///     <textElements>1</textElements>
///   </Statistics>
/// </PageElements>
/// ```
pub fn render_xml(document: &Document) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<PageElements>\n");

    render_page_info(&document.page_info, &mut out);

    out.push_str(&format!("{INDENT}<Hierarchy>\n"));
    render_element(&document.hierarchy, 2, &mut out);
    out.push_str(&format!("{INDENT}</Hierarchy>\n"));

    render_statistics(&document.statistics, &mut out);

    out.push_str("</PageElements>\n");
    out
}

/// Render only the `<Hierarchy>` subtree, without indentation of its parent.
pub fn render_hierarchy(root: &Element) -> String {
    let mut out = String::from("<Hierarchy>\n");
    render_element(root, 1, &mut out);
    out.push_str("</Hierarchy>\n");
    out
}

fn render_page_info(info: &PageInfo, out: &mut String) {
    out.push_str(&format!("{INDENT}<PageInfo>\n"));
    text_element(out, 2, "timestamp", &info.timestamp);
    text_element(out, 2, "packageName", &info.package_name);
    text_element(out, 2, "className", &info.class_name);
    out.push_str(&format!("{INDENT}</PageInfo>\n"));
}

fn render_statistics(stats: &Statistics, out: &mut String) {
    out.push_str(&format!("{INDENT}<Statistics>\n"));
    text_element(out, 2, "totalElements", &stats.total_elements.to_string());
    text_element(out, 2, "clickableElements", &stats.clickable_elements.to_string());
    text_element(out, 2, "textElements", &stats.text_elements.to_string());
    out.push_str(&format!("{INDENT}</Statistics>\n"));
}

fn render_element(element: &Element, level: usize, out: &mut String) {
    let pad = INDENT.repeat(level);

    let attrs: String = element
        .attributes()
        .iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name, escape_attribute(value)))
        .collect();

    if element.actions.is_empty() && element.children.is_empty() {
        out.push_str(&format!("{pad}<Element{attrs} />\n"));
        return;
    }

    out.push_str(&format!("{pad}<Element{attrs}>\n"));

    if !element.actions.is_empty() {
        out.push_str(&format!("{pad}{INDENT}<Actions>\n"));
        for action in &element.actions {
            text_element(out, level + 2, "Action", action);
        }
        out.push_str(&format!("{pad}{INDENT}</Actions>\n"));
    }

    for child in &element.children {
        render_element(child, level + 1, out);
    }

    out.push_str(&format!("{pad}</Element>\n"));
}

fn text_element(out: &mut String, level: usize, name: &str, text: &str) {
    let pad = INDENT.repeat(level);
    if text.is_empty() {
        out.push_str(&format!("{pad}<{name} />\n"));
    } else {
        out.push_str(&format!("{pad}<{name}>{}</{name}>\n", escape_xml(text)));
    }
}

/// Escape XML special characters in element content. Characters XML 1.0
/// does not allow are dropped.
pub fn escape_xml(s: &str) -> String {
    escape(s, false)
}

/// Escape an attribute value. Tab, newline and carriage return become
/// character references so attribute normalization keeps them.
pub fn escape_attribute(s: &str) -> String {
    escape(s, true)
}

fn escape(s: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\r' => out.push_str("&#13;"),
            '\n' if attribute => out.push_str("&#10;"),
            '\t' if attribute => out.push_str("&#9;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// The XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}
