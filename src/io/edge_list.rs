//! # EdgeList
//!
//! Reader and writer for the edge-list format described in [`crate::io`].

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Lines, Write},
    path::Path,
};

use tracing::debug;

use super::*;

/// Largest number of nodes an [`EdgeListReader`] accepts unless configured otherwise
pub const DEFAULT_MAX_NODES: NumNodes = 1 << 26;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Headers announcing more nodes are rejected before the graph is allocated
    max_nodes: NumNodes,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier. An empty identifier disables comments.
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// Updates the largest number of nodes a header may announce
    pub fn max_nodes(mut self, max_nodes: NumNodes) -> EdgeListReader {
        self.max_nodes = max_nodes;
        self
    }
}

impl<G: EdgeListFormat> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut tokens = EdgeListTokens::new(reader, &self.comment_identifier);

        let n: NumNodes = parse_next_value!(tokens, "number of nodes");
        raise_error_unless!(
            n <= self.max_nodes,
            ErrorKind::InvalidData,
            format!("Number of nodes {n} exceeds the limit of {} nodes.", self.max_nodes)
        );
        let m: NumEdges = parse_next_value!(tokens, "number of edges");

        let graph = G::try_parse_entries(&mut tokens, n, m)?;
        debug!(nodes = n, edges = m, "read edge list");
        Ok(graph)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G: EdgeListFormat> EdgeListRead for G {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Whitespace separated tokens of a reader, skipping comment lines
pub struct EdgeListTokens<'a, R> {
    lines: Lines<R>,
    pending: std::vec::IntoIter<String>,
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListTokens<'a, R> {
    pub fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new().into_iter(),
            comment_identifier,
        }
    }

    /// Returns the next token, `None` at the end of input, or propagates a read error
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.next() {
                return Ok(Some(token));
            }

            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            let line = line?;

            if !self.comment_identifier.is_empty()
                && line.trim_start().starts_with(self.comment_identifier)
            {
                continue;
            }

            self.pending = line
                .split_whitespace()
                .map(String::from)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }

    /// Parses the next token as a node id of a graph with `n` nodes
    pub fn try_next_node(&mut self, n: NumNodes, name: &str) -> Result<Node> {
        let u: Node = parse_next_value!(self, name);
        raise_error_unless!(
            u < n,
            ErrorKind::InvalidData,
            format!("{name} {u} is out of range for a graph with {n} nodes.")
        );
        Ok(u)
    }

    /// Parses the next token as an edge weight
    pub fn try_next_weight(&mut self) -> Result<f64> {
        Ok(parse_next_value!(self, "edge weight"))
    }
}

/// Graphs that can be stored as an edge list
pub trait EdgeListFormat: GraphNodeOrder + Sized {
    /// Parses `m` entries following the header into a graph with `n` nodes
    fn try_parse_entries<R: BufRead>(
        tokens: &mut EdgeListTokens<'_, R>,
        n: NumNodes,
        m: NumEdges,
    ) -> Result<Self>;

    /// Number of entries [`EdgeListFormat::try_write_entries`] writes
    fn number_of_entries(&self) -> NumEdges;

    /// Writes one line per entry
    fn try_write_entries<W: Write>(&self, writer: &mut W) -> Result<()>;
}

fn try_parse_unweighted<G, R>(
    tokens: &mut EdgeListTokens<'_, R>,
    n: NumNodes,
    m: NumEdges,
) -> Result<G>
where
    G: GraphNew + GraphEdgeEditing,
    R: BufRead,
{
    let mut graph = G::new(n);
    for _ in 0..m {
        let u = tokens.try_next_node(n, "source node")?;
        let v = tokens.try_next_node(n, "target node")?;
        graph.add_edge(u, v);
    }
    Ok(graph)
}

impl EdgeListFormat for Graph {
    fn try_parse_entries<R: BufRead>(
        tokens: &mut EdgeListTokens<'_, R>,
        n: NumNodes,
        m: NumEdges,
    ) -> Result<Self> {
        try_parse_unweighted(tokens, n, m)
    }

    fn number_of_entries(&self) -> NumEdges {
        self.unique_edges().count() as NumEdges
    }

    fn try_write_entries<W: Write>(&self, writer: &mut W) -> Result<()> {
        for Edge(u, v) in self.unique_edges() {
            writeln!(writer, "{u} {v}")?;
        }
        Ok(())
    }
}

impl EdgeListFormat for Digraph {
    fn try_parse_entries<R: BufRead>(
        tokens: &mut EdgeListTokens<'_, R>,
        n: NumNodes,
        m: NumEdges,
    ) -> Result<Self> {
        try_parse_unweighted(tokens, n, m)
    }

    fn number_of_entries(&self) -> NumEdges {
        self.vertices().map(|u| self.degree_of(u)).sum()
    }

    fn try_write_entries<W: Write>(&self, writer: &mut W) -> Result<()> {
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                writeln!(writer, "{u} {v}")?;
            }
        }
        Ok(())
    }
}

impl EdgeListFormat for WeightGraph {
    fn try_parse_entries<R: BufRead>(
        tokens: &mut EdgeListTokens<'_, R>,
        n: NumNodes,
        m: NumEdges,
    ) -> Result<Self> {
        let mut graph = WeightGraph::new(n);
        for _ in 0..m {
            let u = tokens.try_next_node(n, "source node")?;
            let v = tokens.try_next_node(n, "target node")?;
            let weight = tokens.try_next_weight()?;
            graph.add_edge((u, v, weight));
        }
        Ok(graph)
    }

    fn number_of_entries(&self) -> NumEdges {
        self.unique_edges().count() as NumEdges
    }

    fn try_write_entries<W: Write>(&self, writer: &mut W) -> Result<()> {
        for edge in self.unique_edges() {
            let (u, v) = edge.endpoints();
            writeln!(writer, "{u} {v} {}", edge.weight())?;
        }
        Ok(())
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    comment_identifier: String,
    comment: Option<String>,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
            comment: None,
        }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier used for the leading comment
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListWriter {
        self.comment_identifier = c.into();
        self
    }

    /// Writes `comment` in front of the graph, one comment line per line of `comment`
    pub fn comment<S: Into<String>>(mut self, comment: S) -> EdgeListWriter {
        self.comment = Some(comment.into());
        self
    }
}

impl<G: EdgeListFormat> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        if let Some(comment) = &self.comment {
            for line in comment.lines() {
                writeln!(writer, "{} {line}", self.comment_identifier)?;
            }
        }

        writeln!(writer, "{}", graph.number_of_nodes())?;
        writeln!(writer, "{}", graph.number_of_entries())?;
        graph.try_write_entries(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: EdgeListFormat> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
