pub mod line_reader;
pub mod source_reader;

pub use line_reader::LineReader;
pub use source_reader::SourceReader;
