use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::domain::{Candidate, CandidateStatus};

/// Offer letter rendered for a hired candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferLetter {
    pub file_name: String,
    pub html: String,
}

impl OfferLetter {
    pub fn for_candidate(candidate: &Candidate) -> Result<Self, OfferError> {
        if candidate.status() != CandidateStatus::Hired {
            return Err(OfferError::NotHired {
                name: candidate.name().to_string(),
                status: candidate.status(),
            });
        }

        Ok(Self {
            file_name: offer_file_name(candidate.name()),
            html: render(candidate),
        })
    }

    /// Writes the letter into `dir`, replacing any earlier letter for the same name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, OfferError> {
        let path = dir.join(&self.file_name);
        fs::create_dir_all(dir)
            .and_then(|()| fs::write(&path, &self.html))
            .map_err(|source| OfferError::Io {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}

/// `Offer_<name>.html`, with spaces and path separators turned into underscores so the letter
/// always lands directly inside the offers directory.
pub fn offer_file_name(candidate_name: &str) -> String {
    let stem: String = candidate_name
        .chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!("Offer_{stem}.html")
}

fn render(candidate: &Candidate) -> String {
    let name = escape_html(candidate.name());
    let role = escape_html(candidate.role().label());
    let mut html = String::new();
    html.push_str("<html><body style='font-family: sans-serif; padding: 40px;'>\n");
    html.push_str("<h1 style='color: #2563eb;'>OFFICIAL JOB OFFER</h1><hr>\n");
    html.push_str(&format!("<h3>Dear {name},</h3>\n"));
    html.push_str(&format!(
        "<p>We are pleased to offer you the position of <b>{role}</b>.</p>\n"
    ));
    html.push_str(&format!(
        "<p>Based on your Technical Score ({}), we believe you are a great fit.</p>\n",
        candidate.technical_score()
    ));
    html.push_str("<br><p>Sincerely,<br>HR Team</p></body></html>\n");
    html
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[derive(Debug, thiserror::Error)]
pub enum OfferError {
    #[error("offer letters are only issued to hired candidates; {name} is {status}")]
    NotHired {
        name: String,
        status: CandidateStatus,
    },
    #[error("failed to write offer letter {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}
