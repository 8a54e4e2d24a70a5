pub mod librato;

pub use librato::LibratoSink;
