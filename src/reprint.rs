//! Entry points: collect, order, and splice in one call.

use crate::collect::{collect, SyntaxNode};
use crate::config::ReprintConfig;
use crate::directive::{sort, Directive};
use crate::splice::{check, splice, SpliceError};
use std::convert::Infallible;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReprintError<E> {
    /// The node query, or the renderer it wraps, failed.
    #[error("node query failed: {0}")]
    Query(E),

    #[error(transparent)]
    Splice(#[from] SpliceError),
}

/// Reprints source text from a tree annotated with change directives.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reprinter {
    config: ReprintConfig,
}

impl Reprinter {
    pub fn new(config: ReprintConfig) -> Self {
        Self { config }
    }

    /// Reprint `source` with the changes `query` reports for nodes of `root`.
    ///
    /// An empty source yields an empty output without walking the tree.
    pub fn try_reprint<N, E, Q>(
        &self,
        query: Q,
        root: N,
        source: &str,
    ) -> Result<String, ReprintError<E>>
    where
        N: SyntaxNode,
        Q: FnMut(&N) -> Result<Option<Directive>, E>,
    {
        if source.is_empty() {
            return Ok(String::new());
        }

        let directives = ordered_directives(query, root).map_err(ReprintError::Query)?;
        check(&directives, source, &self.config)?;
        Ok(splice(&directives, source))
    }

    /// Like [`Reprinter::try_reprint`] for a query that cannot fail.
    ///
    /// Only the checks enabled in the configuration can fail here.
    pub fn reprint<N, Q>(&self, query: Q, root: N, source: &str) -> Result<String, SpliceError>
    where
        N: SyntaxNode,
        Q: FnMut(&N) -> Option<Directive>,
    {
        if source.is_empty() {
            return Ok(String::new());
        }

        let directives = infallible_directives(query, root);
        check(&directives, source, &self.config)?;
        Ok(splice(&directives, source))
    }
}

/// Reprint `source` with a fallible query and no checks.
pub fn try_reprint<N, E, Q>(query: Q, root: N, source: &str) -> Result<String, ReprintError<E>>
where
    N: SyntaxNode,
    Q: FnMut(&N) -> Result<Option<Directive>, E>,
{
    Reprinter::default().try_reprint(query, root, source)
}

/// Reprint `source` with an infallible query and no checks.
pub fn reprint<N, Q>(query: Q, root: N, source: &str) -> String
where
    N: SyntaxNode,
    Q: FnMut(&N) -> Option<Directive>,
{
    if source.is_empty() {
        return String::new();
    }

    splice(&infallible_directives(query, root), source)
}

fn ordered_directives<N, E, Q>(query: Q, root: N) -> Result<Vec<Directive>, E>
where
    N: SyntaxNode,
    Q: FnMut(&N) -> Result<Option<Directive>, E>,
{
    let mut directives = collect(query, root)?;
    sort(&mut directives);
    debug!(directives = directives.len(), "collected directives");
    Ok(directives)
}

fn infallible_directives<N, Q>(mut query: Q, root: N) -> Vec<Directive>
where
    N: SyntaxNode,
    Q: FnMut(&N) -> Option<Directive>,
{
    match ordered_directives(|node: &N| Ok::<_, Infallible>(query(node)), root) {
        Ok(directives) => directives,
        Err(never) => match never {},
    }
}
