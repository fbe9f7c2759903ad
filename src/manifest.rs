//! Android manifest scanning.
//!
//! Extracts `<activity>` declarations from manifest-shaped XML documents and
//! resolves their fully-qualified identities against the enclosing package.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{CheckError, Result};

/// One `<activity>` declaration found inside a manifest file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDeclaration {
    /// The `package` attribute of the enclosing manifest root element.
    pub package_name: String,
    /// The declared `android:name`, possibly in leading-dot shorthand.
    pub raw_name: String,
    /// Whether an `android:label` attribute is present on the declaration.
    ///
    /// Presence is the pass condition: an empty label still counts as
    /// labeled.
    pub has_label: bool,
}

impl ActivityDeclaration {
    /// Resolve the fully-qualified identity of this activity.
    ///
    /// A leading dot is manifest shorthand for the enclosing package
    /// (`.Foo` under `a.b` resolves to `a.b.Foo`); any other name passes
    /// through verbatim, including names without dots.
    pub fn fully_qualified_name(&self) -> String {
        if self.raw_name.starts_with('.') {
            format!("{}{}", self.package_name, self.raw_name)
        } else {
            self.raw_name.clone()
        }
    }
}

/// Scan one manifest file for activity declarations.
///
/// The root element must carry a `package` attribute and every `<activity>`
/// element must carry `android:name`; anything else (including a document
/// that fails to parse) is a fatal configuration error, not a check
/// violation.
pub fn scan_manifest(path: &Path) -> Result<Vec<ActivityDeclaration>> {
    let text = fs::read_to_string(path)?;
    parse_manifest(&text).map_err(|details| CheckError::ManifestParse {
        path: path.to_path_buf(),
        details,
    })
}

/// Parse manifest text into activity declarations.
fn parse_manifest(text: &str) -> std::result::Result<Vec<ActivityDeclaration>, String> {
    let mut reader = Reader::from_str(text);
    let mut package_name: Option<String> = None;
    let mut declarations = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if package_name.is_none() {
                    // First element is the document root.
                    match attribute_value(&e, b"package") {
                        Some(package) => package_name = Some(package),
                        None => return Err("missing package attribute on root element".to_string()),
                    }
                } else if e.local_name().as_ref() == b"activity" {
                    let package = package_name.clone().unwrap_or_default();
                    let raw_name = attribute_value(&e, b"android:name")
                        .ok_or_else(|| "activity element without android:name".to_string())?;
                    let has_label = has_attribute(&e, b"android:label");
                    declarations.push(ActivityDeclaration {
                        package_name: package,
                        raw_name,
                        has_label,
                    });
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(format!("XML parse error: {}", e)),
        }
    }

    if package_name.is_none() {
        return Err("document has no root element".to_string());
    }

    Ok(declarations)
}

fn attribute_value(element: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    for attr in element.attributes().flatten() {
        if attr.key.as_ref() == key {
            return Some(String::from_utf8_lossy(&attr.value).into_owned());
        }
    }
    None
}

fn has_attribute(element: &BytesStart<'_>, key: &[u8]) -> bool {
    element
        .attributes()
        .flatten()
        .any(|attr| attr.key.as_ref() == key)
}
