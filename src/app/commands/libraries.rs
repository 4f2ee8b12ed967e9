//! Libraries command: the library asset index.

use serde::Serialize;

use crate::domain::{AppError, AssetKind, LibraryIndex};
use crate::ports::{AssetBuilder, ComponentCatalog};

/// One library offered for an asset kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibrarySummary {
    pub kind: &'static str,
    pub id: String,
    pub name: String,
}

/// Build the library index and flatten it, optionally for one asset kind.
pub fn execute<C, A>(
    catalog: &C,
    assets: &A,
    kind: Option<AssetKind>,
) -> Result<Vec<LibrarySummary>, AppError>
where
    C: ComponentCatalog,
    A: AssetBuilder,
{
    let index = LibraryIndex::build(&catalog.list_components()?, assets);
    let kinds: Vec<AssetKind> = match kind {
        Some(kind) => vec![kind],
        None => AssetKind::ALL.to_vec(),
    };

    Ok(kinds
        .into_iter()
        .flat_map(|kind| {
            index.options(kind).iter().map(move |(id, name)| LibrarySummary {
                kind: kind.as_str(),
                id: id.clone(),
                name: name.clone(),
            })
        })
        .collect())
}
