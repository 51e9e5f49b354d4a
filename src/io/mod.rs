/*!
# IO

Utilities for reading and writing graphs as plain-text edge lists.

## Format

The input is a sequence of whitespace-separated tokens; line breaks carry no meaning.
1. the number of nodes `n`,
2. the number of edges `m`,
3. `m` entries `u v` (unweighted graphs) or `u v w` (weighted graphs) with 0-based node ids
   `u, v < n` and a floating point weight `w`.

Lines starting with the comment identifier (`#` by default) are skipped.
Readers reject headers announcing more than [`DEFAULT_MAX_NODES`] nodes before allocating the
graph; [`EdgeListReader::max_nodes`] raises the limit.

```text
3
2
0 1 0.5
1 2 0.25
```

## Traits

- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers.
- [`EdgeListRead`] and [`EdgeListWrite`] are shorthands with default settings, implemented
  for [`Graph`], [`Digraph`] and [`WeightGraph`].

All functions report malformed input as [`std::io::Error`] of kind [`ErrorKind::InvalidData`].
*/

pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next token of an [`EdgeListTokens`] and returns early if it fails
macro_rules! parse_next_value {
    ($tokens : expr, $name : expr) => {{
        let Some(token) = $tokens.next_token()? else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of input when parsing {}.", $name)
            ));
        };

        let Ok(parsed) = token.parse() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Invalid value {token:?} found. Cannot parse {}.", $name)
            ));
        };

        parsed
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
