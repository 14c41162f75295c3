use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("Catalog has no sections")]
  EmptyCatalog,

  #[error("Duplicate section id: {0}")]
  DuplicateSection(String),

  #[error("Section has no subsections: {0}")]
  EmptySection(String),
}

pub type Result<T> = std::result::Result<T, Error>;
