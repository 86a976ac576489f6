/*!
# IO

Utilities for reading and writing graphs as *graph descriptions*, a line-based text format:

```text
undirected weighted
a b 4
b c 1
d
```

- The first line holds the [`GraphKind`](crate::repr::GraphKind):
  `<directed|undirected> <weighted|unweighted>`.
- Every other line holds one token (a vertex declaration), two tokens (an unweighted edge `u v`)
  or three tokens (a weighted edge `u v w` with integral `w`).
  The edge form must match the declared weighting.
- Vertices referenced by an edge are created on first sight; blank lines are skipped.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers.
- [`DescriptionRead`] and [`DescriptionWrite`] are shorthands with default settings implemented
  on [`Graph`](crate::repr::Graph) itself.
*/

mod description;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::prelude::*;

pub use description::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns [`GraphError::Format`] if the input is not a valid representation
    /// of a graph in the expected format and [`GraphError::Io`] if reading fails.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Shorthand for creating a new format error at a 1-based line number
macro_rules! format_error {
    ($line: expr, $($info: tt)*) => {
        GraphError::Format {
            line: $line,
            reason: format!($($info)*),
        }
    };
}

/// Shorthand for returning a format error early when a condition fails
macro_rules! raise_error_unless {
    ($cond: expr, $line: expr, $($info: tt)*) => {
        if !($cond) {
            return Err(format_error!($line, $($info)*));
        }
    };
}

use format_error;
use raise_error_unless;
