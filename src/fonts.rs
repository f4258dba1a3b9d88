//! Font resolution for the layout engine.
//!
//! The resolver probes an ordered table of candidate font files across an
//! ordered list of search directories and loads the first one the engine
//! accepts. Candidates cover well-known CJK font packages so that
//! non-Latin scripts render; if none of them is present, a table of
//! ubiquitous sans-serif fonts serves as the fallback. Per-candidate
//! failures (missing files, unparseable data such as `.ttc` collections
//! the engine cannot read) are skipped silently.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use genpdf::fonts::{FontData, FontFamily};

use crate::error::{Error, Result};

/// A candidate font: family name and the file to probe for.
#[derive(Debug, Clone, Copy)]
struct FontCandidate {
    family: &'static str,
    file: &'static str,
}

/// CJK-capable body font candidates, in preference order.
const BODY_CANDIDATES: &[FontCandidate] = &[
    FontCandidate {
        family: "MicrosoftJhengHei",
        file: "msjh.ttc",
    },
    FontCandidate {
        family: "MicrosoftJhengHei",
        file: "msjh.ttf",
    },
    FontCandidate {
        family: "NotoSansCJK",
        file: "NotoSansCJK-Regular.ttc",
    },
    FontCandidate {
        family: "NotoSansTC",
        file: "NotoSansTC-Regular.otf",
    },
];

/// Sans-serif fallbacks probed when no body candidate resolves.
const FALLBACK_CANDIDATES: &[FontCandidate] = &[
    FontCandidate {
        family: "DejaVuSans",
        file: "DejaVuSans.ttf",
    },
    FontCandidate {
        family: "LiberationSans",
        file: "LiberationSans-Regular.ttf",
    },
    FontCandidate {
        family: "NotoSans",
        file: "NotoSans-Regular.ttf",
    },
    FontCandidate {
        family: "Arial",
        file: "arial.ttf",
    },
];

/// Monospace candidates for code blocks and verbatim tables.
const MONO_CANDIDATES: &[FontCandidate] = &[
    FontCandidate {
        family: "DejaVuSansMono",
        file: "DejaVuSansMono.ttf",
    },
    FontCandidate {
        family: "LiberationMono",
        file: "LiberationMono-Regular.ttf",
    },
    FontCandidate {
        family: "NotoSansMono",
        file: "NotoSansMono-Regular.ttf",
    },
    FontCandidate {
        family: "CourierNew",
        file: "cour.ttf",
    },
    FontCandidate {
        family: "Consolas",
        file: "consola.ttf",
    },
];

/// Fonts selected for one conversion run.
#[derive(Clone)]
pub struct ResolvedFonts {
    /// Family name of the body font
    pub body_family: String,
    /// Body font data for the layout engine
    pub body: FontFamily<FontData>,
    /// Family name of the monospace font
    pub mono_family: String,
    /// Monospace font data for the layout engine
    pub mono: FontFamily<FontData>,
}

impl fmt::Debug for ResolvedFonts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedFonts")
            .field("body_family", &self.body_family)
            .field("mono_family", &self.mono_family)
            .finish()
    }
}

/// Probes candidate font files and caches the first usable selection.
///
/// Construct one resolver per process and share it across conversions; the
/// result is cached after the first successful `resolve`, so re-resolving
/// is cheap.
#[derive(Debug, Default)]
pub struct FontResolver {
    search_dirs: Option<Vec<PathBuf>>,
    cache: OnceLock<ResolvedFonts>,
}

impl FontResolver {
    /// Create a resolver over the default search directories: the platform
    /// font directories, a `fonts` subdirectory of the working directory,
    /// and the working directory itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver restricted to the given search directories.
    pub fn with_search_dirs(dirs: Vec<PathBuf>) -> Self {
        Self {
            search_dirs: Some(dirs),
            cache: OnceLock::new(),
        }
    }

    /// Resolve the body and monospace fonts.
    ///
    /// Returns the cached selection after the first success. Fails only
    /// when no candidate in any table resolves; individual candidate
    /// failures are not surfaced.
    pub fn resolve(&self) -> Result<&ResolvedFonts> {
        if let Some(fonts) = self.cache.get() {
            return Ok(fonts);
        }
        let fonts = self.resolve_uncached()?;
        Ok(self.cache.get_or_init(|| fonts))
    }

    fn resolve_uncached(&self) -> Result<ResolvedFonts> {
        let dirs = match &self.search_dirs {
            Some(dirs) => dirs.clone(),
            None => default_search_dirs(),
        };

        let (body_family, body) = probe(BODY_CANDIDATES, &dirs)
            .or_else(|| probe(FALLBACK_CANDIDATES, &dirs))
            .ok_or_else(|| {
                Error::Font("no usable text font found in any search directory".into())
            })?;

        // Code blocks reuse the body family when no monospace font exists.
        let (mono_family, mono) = probe(MONO_CANDIDATES, &dirs)
            .unwrap_or_else(|| (body_family.clone(), body.clone()));

        log::debug!("resolved body font {body_family}, code font {mono_family}");

        Ok(ResolvedFonts {
            body_family,
            body,
            mono_family,
            mono,
        })
    }
}

/// Probe candidates in order, directories in order within each candidate.
fn probe(candidates: &[FontCandidate], dirs: &[PathBuf]) -> Option<(String, FontFamily<FontData>)> {
    for candidate in candidates {
        for dir in dirs {
            if let Some(data) = load_font_file(&dir.join(candidate.file)) {
                return Some((candidate.family.to_owned(), single_face_family(data)));
            }
        }
    }
    None
}

/// Load one font file, returning `None` on any failure.
fn load_font_file(path: &Path) -> Option<FontData> {
    if !path.is_file() {
        return None;
    }
    let bytes = fs::read(path).ok()?;
    FontData::new(bytes, None).ok()
}

/// Use one face for all four style slots of an engine font family.
///
/// The candidate tables name single regular-weight files; the engine
/// synthesizes nothing, so bold and italic render as regular.
fn single_face_family(data: FontData) -> FontFamily<FontData> {
    FontFamily {
        regular: data.clone(),
        bold: data.clone(),
        italic: data.clone(),
        bold_italic: data,
    }
}

fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs = system_font_dirs();
    dirs.push(PathBuf::from("fonts"));
    dirs.push(PathBuf::from("."));
    dirs
}

fn system_font_dirs() -> Vec<PathBuf> {
    let roots: &[&str] = if cfg!(target_os = "windows") {
        &["C:/Windows/Fonts"]
    } else if cfg!(target_os = "macos") {
        &["/Library/Fonts", "/System/Library/Fonts", "/System/Library/Fonts/Supplemental"]
    } else {
        &[
            "/usr/share/fonts",
            "/usr/share/fonts/truetype/dejavu",
            "/usr/share/fonts/truetype/liberation",
            "/usr/share/fonts/truetype/noto",
            "/usr/share/fonts/opentype/noto",
            "/usr/local/share/fonts",
        ]
    };
    roots.iter().map(PathBuf::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_fails_without_any_font() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = FontResolver::with_search_dirs(vec![dir.path().to_path_buf()]);
        let err = resolver.resolve().unwrap_err();
        assert!(matches!(err, Error::Font(_)));
    }

    #[test]
    fn test_unparseable_candidate_is_skipped_silently() {
        let dir = tempfile::tempdir().unwrap();
        // Present but not a font: the resolver must skip it, not fail on it.
        fs::write(dir.path().join("DejaVuSans.ttf"), b"not a font").unwrap();
        let resolver = FontResolver::with_search_dirs(vec![dir.path().to_path_buf()]);
        let err = resolver.resolve().unwrap_err();
        assert!(matches!(err, Error::Font(_)));
    }

    #[test]
    fn test_probe_missing_directory_yields_none() {
        let dirs = vec![PathBuf::from("/nonexistent/fonts/dir")];
        assert!(probe(BODY_CANDIDATES, &dirs).is_none());
    }

    #[test]
    fn test_default_search_dirs_end_with_working_dir() {
        let dirs = default_search_dirs();
        assert_eq!(dirs.last(), Some(&PathBuf::from(".")));
        assert!(dirs.contains(&PathBuf::from("fonts")));
    }
}
