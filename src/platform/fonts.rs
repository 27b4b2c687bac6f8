// CalcIcon - platform/fonts.rs
//
// Font fallback chain: candidate files, then system discovery, then the
// built-in face. Every failed attempt is recorded but never fatal.

use crate::core::builtin::BuiltinFace;
use crate::core::face::GlyphFace;
use crate::core::outline::OutlineFace;
use crate::util::constants;
use crate::util::error::FontError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the resolved face came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// One of the candidate font files.
    File(PathBuf),
    /// Found by querying the system font database.
    System {
        family: String,
        path: Option<PathBuf>,
    },
    /// The built-in geometric face.
    Builtin,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::System {
                family,
                path: Some(path),
            } => write!(f, "{family} ({})", path.display()),
            Self::System { family, path: None } => write!(f, "{family}"),
            Self::Builtin => write!(f, "built-in default face"),
        }
    }
}

/// Ordered list of places to look for a font.
#[derive(Debug, Clone)]
pub struct FontCandidates {
    /// Font files tried in order.
    pub paths: Vec<PathBuf>,
    /// Whether to query the system font database after the files.
    pub discover_system: bool,
}

impl Default for FontCandidates {
    fn default() -> Self {
        Self {
            paths: constants::FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
            discover_system: true,
        }
    }
}

/// A face ready for drawing, plus its provenance.
pub struct ResolvedFace {
    pub face: Box<dyn GlyphFace>,
    pub source: FontSource,
}

impl fmt::Debug for ResolvedFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedFace")
            .field("face", &self.face.name())
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve a face covering every character in `required`.
///
/// Returns the face together with every soft failure met on the way. The
/// built-in face is the last resort, so this never fails.
pub fn resolve_face(
    candidates: &FontCandidates,
    em_px: f32,
    required: &[char],
) -> (ResolvedFace, Vec<FontError>) {
    let mut errors = Vec::new();

    for path in &candidates.paths {
        match load_font_file(path, em_px, required) {
            Ok(face) => {
                tracing::info!(font = %path.display(), "Using font");
                return (
                    ResolvedFace {
                        face: Box::new(face),
                        source: FontSource::File(path.clone()),
                    },
                    errors,
                );
            }
            Err(e) => {
                tracing::debug!(error = %e, "Font candidate rejected");
                errors.push(e);
            }
        }
    }

    if candidates.discover_system {
        match discover_system_font(em_px, required) {
            Ok((face, source)) => {
                tracing::info!(font = %source, "Using system font");
                return (
                    ResolvedFace {
                        face: Box::new(face),
                        source,
                    },
                    errors,
                );
            }
            Err(mut discovery_errors) => {
                for e in &discovery_errors {
                    tracing::debug!(error = %e, "System font rejected");
                }
                errors.append(&mut discovery_errors);
            }
        }
    }

    tracing::warn!(
        attempts = errors.len(),
        "Could not load any candidate font, using built-in default face"
    );
    (
        ResolvedFace {
            face: Box::new(BuiltinFace::new(em_px)),
            source: FontSource::Builtin,
        },
        errors,
    )
}

/// Load a single font file.
pub fn load_font_file(path: &Path, em_px: f32, required: &[char]) -> Result<OutlineFace, FontError> {
    let data = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    OutlineFace::from_bytes(data, 0, &path.display().to_string(), em_px, required)
}

/// Query the system font database for a bold sans-serif face.
///
/// Tries each configured family in turn, then the generic sans-serif
/// family. A family that resolves but lacks an operator is skipped.
fn discover_system_font(
    em_px: f32,
    required: &[char],
) -> Result<(OutlineFace, FontSource), Vec<FontError>> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "System font database loaded");

    let mut errors = Vec::new();
    let families = constants::SYSTEM_FONT_FAMILIES
        .iter()
        .map(|name| fontdb::Family::Name(*name))
        .chain(std::iter::once(fontdb::Family::SansSerif));

    for family in families {
        let wanted = [family];
        let query = fontdb::Query {
            families: &wanted,
            weight: fontdb::Weight::BOLD,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        let Some(id) = db.query(&query) else {
            continue;
        };

        let Some(info) = db.face(id) else {
            continue;
        };
        let family_name = info
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| info.post_script_name.clone());
        let path = match &info.source {
            fontdb::Source::File(path) => Some(path.clone()),
            _ => None,
        };

        let loaded = db.with_face_data(id, |data, index| {
            OutlineFace::from_bytes(data.to_vec(), index, &family_name, em_px, required)
        });
        match loaded {
            Some(Ok(face)) => {
                return Ok((
                    face,
                    FontSource::System {
                        family: family_name,
                        path,
                    },
                ))
            }
            Some(Err(e)) => errors.push(e),
            None => {
                if let Some(path) = path {
                    errors.push(FontError::Read {
                        path,
                        source: std::io::Error::new(
                            std::io::ErrorKind::NotFound,
                            "font data unavailable",
                        ),
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        errors.push(FontError::NotDiscovered {
            families: constants::SYSTEM_FONT_FAMILIES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        });
    }
    Err(errors)
}
