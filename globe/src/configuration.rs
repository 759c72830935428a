use crate::error::Error;
use std::path::{Path, PathBuf};

pub const FILE_PATH: &'static str = "configuration.toml";

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Root {
    pub sphere: Sphere,
    pub output: Output,
}

#[derive(serde::Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct Sphere {
    pub level: u32,
    pub seed: u64,
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere { level: 5, seed: 12345 }
    }
}

#[derive(serde::Deserialize, clap::ValueEnum, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Raw interleaved vertex buffer, 6 native-endian f32 per vertex.
    Bin,
    /// Wavefront OBJ with per-vertex colors.
    Obj,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Bin => "bin",
            Format::Obj => "obj",
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        Format::Bin
    }
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Output {
    pub format: Format,
    pub path: Option<PathBuf>,
}

impl Output {
    /// The configured path, or `globe.<extension>` in the working directory.
    pub fn path_or_default(&self) -> PathBuf {
        match self.path {
            Some(ref path) => path.clone(),
            None => PathBuf::from(format!("globe.{}", self.format.extension())),
        }
    }
}

pub fn parse(contents: &str) -> Result<Root, toml::de::Error> {
    toml::from_str(contents)
}

pub fn read(configuration_path: impl AsRef<Path>) -> Result<Root, Error> {
    let configuration_path = configuration_path.as_ref();
    let contents = std::fs::read_to_string(configuration_path).map_err(|source| Error::ReadConfiguration {
        path: configuration_path.to_path_buf(),
        source,
    })?;
    parse(&contents).map_err(|source| Error::ParseConfiguration {
        path: configuration_path.to_path_buf(),
        source,
    })
}
