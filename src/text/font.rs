use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use usvg::fontdb;

use crate::{
    foundation::error::{WallpaperError, WallpaperResult},
    text::bitmap::BitmapFont,
};

/// Identifier that always selects the bundled bitmap font.
pub const BUILTIN_FONT: &str = "builtin";

/// Requested face and size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// File path, font file name (`consola.ttf`), family name, or [`BUILTIN_FONT`].
    pub name: String,
    /// Font size in pixels.
    pub size_px: f32,
}

impl FontSpec {
    /// Spec for `name` at `size_px`.
    pub fn new(name: impl Into<String>, size_px: f32) -> Self {
        Self {
            name: name.into(),
            size_px,
        }
    }

    /// Spec that skips resolution and uses the bitmap font.
    pub fn builtin(size_px: f32) -> Self {
        Self::new(BUILTIN_FONT, size_px)
    }
}

/// Raw bytes of a resolved outline font.
#[derive(Clone, Debug)]
pub struct OutlineFace {
    /// Identifier the face was resolved from; also the layout cache key.
    pub key: String,
    /// TrueType/OpenType data.
    pub bytes: Arc<Vec<u8>>,
}

/// Outcome of font resolution. Never an error: unresolved faces degrade to the bitmap font.
#[derive(Clone, Debug)]
pub enum ResolvedFont {
    /// A real font file was found.
    Outline(OutlineFace),
    /// The bundled bitmap font.
    Bitmap(BitmapFont),
}

/// Maps font identifiers to font data, consulting the system font database lazily.
pub struct FontResolver {
    system_fonts: bool,
    font_dirs: Vec<PathBuf>,
    db: Option<Arc<fontdb::Database>>,
    cache: HashMap<String, Option<Arc<Vec<u8>>>>,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontResolver")
            .field("system_fonts", &self.system_fonts)
            .field("font_dirs", &self.font_dirs)
            .field("db_loaded", &self.db.is_some())
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl FontResolver {
    /// Resolver backed by the system font database.
    pub fn new() -> Self {
        Self {
            system_fonts: true,
            font_dirs: Vec::new(),
            db: None,
            cache: HashMap::new(),
        }
    }

    /// Resolver that never reads system fonts; only explicit paths and added directories.
    pub fn without_system_fonts() -> Self {
        Self {
            system_fonts: false,
            ..Self::new()
        }
    }

    /// Also search `dir` and its subdirectories for font files.
    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dirs.push(dir.into());
        self.db = None;
        self
    }

    /// Resolve `spec`, falling back to the bitmap font when the face cannot be loaded.
    pub fn resolve(&mut self, spec: &FontSpec) -> ResolvedFont {
        let fallback = BitmapFont::for_size(spec.size_px);
        let name = spec.name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case(BUILTIN_FONT) {
            return ResolvedFont::Bitmap(fallback);
        }

        match self.load_face(name) {
            Ok(bytes) => ResolvedFont::Outline(OutlineFace {
                key: name.to_owned(),
                bytes,
            }),
            Err(err) => {
                tracing::debug!(font = name, error = %err, "using bundled bitmap font");
                ResolvedFont::Bitmap(fallback)
            }
        }
    }

    fn load_face(&mut self, name: &str) -> WallpaperResult<Arc<Vec<u8>>> {
        if let Some(hit) = self.cache.get(name) {
            return hit
                .clone()
                .ok_or_else(|| WallpaperError::font(format!("font '{name}' not found")));
        }

        let found = self.find_face(name);
        self.cache
            .insert(name.to_owned(), found.as_ref().ok().cloned());
        found
    }

    fn find_face(&mut self, name: &str) -> WallpaperResult<Arc<Vec<u8>>> {
        let path = Path::new(name);
        if path.is_file() {
            let bytes = std::fs::read(path)
                .with_context(|| format!("read font file '{}'", path.display()))?;
            return Ok(Arc::new(bytes));
        }

        let db = self.database();
        let id = face_by_file_name(&db, name)
            .or_else(|| face_by_family(&db, name))
            .or_else(|| {
                let stem = path.file_stem().and_then(|s| s.to_str())?;
                face_by_family(&db, stem)
            })
            .ok_or_else(|| WallpaperError::font(format!("font '{name}' not found")))?;

        db.with_face_data(id, |data, _index| data.to_vec())
            .map(Arc::new)
            .ok_or_else(|| WallpaperError::font(format!("font '{name}' has no readable data")))
    }

    fn database(&mut self) -> Arc<fontdb::Database> {
        if let Some(db) = &self.db {
            return Arc::clone(db);
        }

        let mut db = fontdb::Database::new();
        if self.system_fonts {
            db.load_system_fonts();
        }
        for dir in &self.font_dirs {
            db.load_fonts_dir(dir);
        }
        tracing::debug!(faces = db.len(), "loaded font database");

        let db = Arc::new(db);
        self.db = Some(Arc::clone(&db));
        db
    }
}

fn face_by_file_name(db: &fontdb::Database, file_name: &str) -> Option<fontdb::ID> {
    db.faces().find_map(|face| {
        let path = match &face.source {
            fontdb::Source::File(p) => p,
            fontdb::Source::SharedFile(p, _) => p,
            _ => return None,
        };
        let candidate = path.file_name()?.to_str()?;
        candidate
            .eq_ignore_ascii_case(file_name)
            .then_some(face.id)
    })
}

fn face_by_family(db: &fontdb::Database, family: &str) -> Option<fontdb::ID> {
    let families = [fontdb::Family::Name(family)];
    let query = fontdb::Query {
        families: &families,
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    db.query(&query)
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
