use std::path::{Path, PathBuf};

/// Opaque handle to a source unit registered in a [`SourceSet`]. Tokens
/// store and hand back the id without interpreting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(u32);

/// One source file or buffer fed to the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: PathBuf,
    pub content: String,
}

/// Owns every source buffer for the duration of a compilation and hands
/// out stable ids for them.
#[derive(Debug, Default)]
pub struct SourceSet {
    sources: Vec<Source>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> SourceId {
        let id = SourceId(self.sources.len() as u32);
        self.sources.push(Source {
            path: path.into(),
            content: content.into(),
        });
        id
    }

    pub fn get(&self, id: SourceId) -> &Source {
        &self.sources[id.0 as usize]
    }

    pub fn path(&self, id: SourceId) -> &Path {
        &self.get(id).path
    }
}
