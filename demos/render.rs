//! Builds a small tree by hand and prints its JSON rendering.
//!
//! Run with `RUST_LOG=trace cargo run --example render` to see the writer's log
//! output.

use std::io::{self, Write};

use valtree::{Escape, SeqValue, StructValue, Value, WriterConfig};

fn main() -> valtree::Result<()> {
    env_logger::init();

    let mut seq = SeqValue::new();
    seq.push_back(false);
    seq.push_back("Hello");

    let mut root = StructValue::new();
    root.insert("val", 42);
    root.insert("seq", seq);
    root.insert("quote", "say \"hi\"");
    let root = Value::from(root);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    root.write_to_writer(&mut out)?;
    writeln!(out)?;

    root.write_to_writer_with(&mut out, WriterConfig::new().escape(Escape::Json))?;
    writeln!(out)?;

    Ok(())
}
