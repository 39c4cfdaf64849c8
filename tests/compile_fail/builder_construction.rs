// Compile-fail test for builder construction
// The tree builder is internal to the crate: parse runs construct one per
// call, and outside callers must go through the parse entry points.

use outliner::parser::builder::TreeBuilder;

fn main() {
    // struct `TreeBuilder` is crate-private and cannot be named here
    let _builder = TreeBuilder::new("doc");
}
