/*!
# Graph Algorithms

This module provides the classical single-graph algorithms of this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use idxgraph::algo::*;
```
and gain access to traversals, path finders, cycle detection, orderings and components.

Most algorithms are result objects built once from a graph (`PathFinder`, `Dag`,
`ConnectedComponents`, ...) that own their arrays and answer queries afterwards.
The most common ones are also available as methods via the traits [`Traversal`],
[`Cycles`] and [`Connectivity`].
*/

mod closure;
mod components;
mod cycle;
mod order;
mod paths;
mod traversal;

use crate::prelude::*;

pub use closure::*;
pub use components::*;
pub use cycle::*;
pub use order::*;
pub use paths::*;
pub use traversal::*;
