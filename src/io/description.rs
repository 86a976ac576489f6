//! # Graph Descriptions
//!
//! Reader and writer for the line format described in [`crate::io`].

use std::{
    fmt::Display,
    io::{ErrorKind, Lines},
    str::FromStr,
};

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::*;

/// A GraphReader for graph descriptions
#[derive(Debug, Clone, Default)]
pub struct DescriptionReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: Option<String>,
}

impl DescriptionReader {
    /// Creates a new (default) reader which only skips blank lines
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier.
    /// The header line is never treated as a comment.
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> DescriptionReader {
        self.comment_identifier = Some(c.into());
        self
    }

    fn is_skipped(&self, line: &str) -> bool {
        let line = line.trim_start();
        line.is_empty()
            || self
                .comment_identifier
                .as_deref()
                .is_some_and(|c| line.starts_with(c))
    }
}

impl<L> GraphReader<Graph<L>> for DescriptionReader
where
    L: Label + FromStr,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<Graph<L>> {
        DescriptionLinesReader::try_new(reader)?.read_into(self)
    }
}

/// Trait for creating graphs from a DescriptionReader.
/// Used as shorthand for default DescriptionReader settings
pub trait DescriptionRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_description<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_description_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_description(BufReader::new(File::open(path)?))
    }
}

impl<L> DescriptionRead for Graph<L>
where
    L: Label + FromStr,
{
    fn try_read_description<R: BufRead>(reader: R) -> Result<Self> {
        DescriptionReader::default().try_read_graph(reader)
    }
}

/// Consumes the lines of a description after the header has been parsed
struct DescriptionLinesReader<R> {
    lines: Lines<R>,
    /// Number of the last line consumed
    line: usize,
    kind: GraphKind,
}

impl<R: BufRead> DescriptionLinesReader<R> {
    /// Parses the first line as the header
    fn try_new(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        let header = lines
            .next()
            .transpose()?
            .ok_or_else(|| format_error!(1, "Header not found"))?;
        let kind = header
            .parse::<GraphKind>()
            .map_err(|reason| format_error!(1, "Invalid header: {reason}"))?;

        Ok(Self {
            lines,
            line: 1,
            kind,
        })
    }

    fn read_into<L>(mut self, settings: &DescriptionReader) -> Result<Graph<L>>
    where
        L: Label + FromStr,
    {
        let mut graph = Graph::with_kind(self.kind);

        while let Some(content) = self.lines.next().transpose()? {
            self.line += 1;
            if settings.is_skipped(&content) {
                continue;
            }

            let tokens: SmallVec<[&str; 3]> = content.split_whitespace().collect();
            match tokens.as_slice() {
                [u] => {
                    graph.ensure_vertex(parse_label::<L>(u, self.line)?);
                }
                [u, v] => {
                    raise_error_unless!(
                        !self.kind.weighted,
                        self.line,
                        "Missing weight of edge in a weighted graph"
                    );
                    self.insert_edge(&mut graph, u, v, 0)?;
                }
                [u, v, w] => {
                    raise_error_unless!(
                        self.kind.weighted,
                        self.line,
                        "Weight given for edge in an unweighted graph"
                    );
                    let weight: Weight = w
                        .parse()
                        .map_err(|_| format_error!(self.line, "Invalid weight `{w}`"))?;
                    self.insert_edge(&mut graph, u, v, weight)?;
                }
                _ => {
                    return Err(format_error!(
                        self.line,
                        "Expected 1 to 3 tokens, found {}",
                        tokens.len()
                    ));
                }
            }
        }

        debug!(
            kind = %self.kind,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            lines = self.line,
            "read graph description"
        );
        Ok(graph)
    }

    fn insert_edge<L>(&self, graph: &mut Graph<L>, u: &str, v: &str, weight: Weight) -> Result<()>
    where
        L: Label + FromStr,
    {
        let u = graph.ensure_vertex(parse_label::<L>(u, self.line)?);
        let v = graph.ensure_vertex(parse_label::<L>(v, self.line)?);
        trace!(line = self.line, u, v, weight, "edge");

        graph
            .add_edge_between(u, v, weight)
            .map_err(|err| format_error!(self.line, "{err}"))
    }
}

fn parse_label<L: FromStr>(token: &str, line: usize) -> Result<L> {
    token
        .parse()
        .map_err(|_| format_error!(line, "Invalid vertex `{token}`"))
}

/// A GraphWriter for graph descriptions
#[derive(Debug, Clone)]
pub struct DescriptionWriter {
    declare_all_vertices: bool,
}

impl Default for DescriptionWriter {
    /// Declares every vertex so that reading preserves the vertex order
    fn default() -> Self {
        Self {
            declare_all_vertices: true,
        }
    }
}

impl DescriptionWriter {
    /// Creates a new (default) writer
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, only vertices without any incident edge get a declaration line.
    /// The output is then more compact, but reading it back may reorder vertices.
    pub fn declare_all_vertices(mut self, declare: bool) -> Self {
        self.declare_all_vertices = declare;
        self
    }
}

fn check_label<L: Display>(label: &L) -> Result<()> {
    let rendered = label.to_string();
    if rendered.is_empty() || rendered.contains(char::is_whitespace) {
        return Err(std::io::Error::new(
            ErrorKind::InvalidData,
            format!("Vertex `{rendered}` cannot be written as a single token"),
        )
        .into());
    }
    Ok(())
}

impl<L: Label> GraphWriter<Graph<L>> for DescriptionWriter {
    fn try_write_graph<W: Write>(&self, graph: &Graph<L>, mut writer: W) -> Result<()> {
        for label in graph.labels() {
            check_label(label)?;
        }

        writeln!(writer, "{}", graph.kind())?;

        let in_degs = graph.in_degrees();
        for u in graph.vertices() {
            if self.declare_all_vertices || (graph.degree_of(u) == 0 && in_degs[u as usize] == 0) {
                writeln!(writer, "{}", graph.label_of(u))?;
            }
        }

        for (u, v, weight) in graph.labelled_edges() {
            match weight {
                Some(w) => writeln!(writer, "{u} {v} {w}")?,
                None => writeln!(writer, "{u} {v}")?,
            }
        }

        writer.flush()?;
        Ok(())
    }
}

/// Trait for writing graphs as descriptions with default DescriptionWriter settings
pub trait DescriptionWrite {
    /// Tries to write the graph to a given writer
    fn try_write_description<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a given file
    fn try_write_description_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_description(BufWriter::new(File::create(path)?))
    }
}

impl<L: Label> DescriptionWrite for Graph<L> {
    fn try_write_description<W: Write>(&self, writer: W) -> Result<()> {
        DescriptionWriter::default().try_write_graph(self, writer)
    }
}
