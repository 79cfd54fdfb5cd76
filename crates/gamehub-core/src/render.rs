//! Markup for the three container states.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::files::FileDescriptor;

fn default_size_label() -> String {
    "Size".to_string()
}

fn default_updated_label() -> String {
    "Updated".to_string()
}

fn default_download_label() -> String {
    "Download".to_string()
}

fn default_empty_message() -> String {
    "No files have been added for this game yet".to_string()
}

fn default_error_message() -> String {
    "Failed to load files".to_string()
}

/// User-visible strings used in rendered markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "default_size_label")]
    pub size: String,
    #[serde(default = "default_updated_label")]
    pub updated: String,
    #[serde(default = "default_download_label")]
    pub download: String,
    #[serde(default = "default_empty_message")]
    pub empty: String,
    #[serde(default = "default_error_message")]
    pub error: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            size: default_size_label(),
            updated: default_updated_label(),
            download: default_download_label(),
            empty: default_empty_message(),
            error: default_error_message(),
        }
    }
}

/// Escape text for use in element content or a quoted attribute value.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Card for a single downloadable file.
pub fn file_card(file: &FileDescriptor, labels: &Labels) -> String {
    let mut out = String::new();
    // Cards are inserted after the scroll observer runs, so they start visible.
    out.push_str("<div class=\"file-card animate-on-scroll animate\">\n");
    writeln!(
        out,
        "  <div class=\"file-name\">{}</div>",
        escape_html(&file.name)
    )
    .unwrap();
    out.push_str("  <div class=\"file-info\">\n");
    writeln!(
        out,
        "    <span>{}: {}</span>",
        escape_html(&labels.size),
        escape_html(&file.size_human)
    )
    .unwrap();
    writeln!(
        out,
        "    <span>{}: {}</span>",
        escape_html(&labels.updated),
        escape_html(&file.modified)
    )
    .unwrap();
    out.push_str("  </div>\n");
    writeln!(
        out,
        "  <a href=\"{}\" class=\"download-btn\" download>",
        escape_html(&file.url)
    )
    .unwrap();
    writeln!(
        out,
        "    <i class=\"fas fa-download\"></i> {}",
        escape_html(&labels.download)
    )
    .unwrap();
    out.push_str("  </a>\n");
    out.push_str("</div>\n");
    out
}

/// Populated state: one card per file, in the given order.
pub fn file_list(files: &[FileDescriptor], labels: &Labels) -> String {
    files.iter().map(|file| file_card(file, labels)).collect()
}

pub fn empty_state(labels: &Labels) -> String {
    format!(
        "<div class=\"empty-state\">\n  <i class=\"fas fa-folder-open fa-3x\"></i>\n  <p>{}</p>\n</div>\n",
        escape_html(&labels.empty)
    )
}

pub fn error_state(labels: &Labels) -> String {
    format!(
        "<div class=\"error-state\">\n  <i class=\"fas fa-exclamation-triangle fa-3x\"></i>\n  <p>{}</p>\n</div>\n",
        escape_html(&labels.error)
    )
}
