use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::output::xml::render_xml;
use crate::snapshot::document::Document;
use crate::snapshot::error::SnapshotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xml,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "xml",
            OutputFormat::Json => "json",
        }
    }
}

pub fn render(document: &Document, format: OutputFormat) -> Result<String, SnapshotError> {
    match format {
        OutputFormat::Xml => Ok(render_xml(document)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(document).map_err(|source| SnapshotError::Json {
                context: "rendering document".to_string(),
                source,
            })
        }
    }
}
