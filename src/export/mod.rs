mod sequence;
mod table_exporter;

pub use sequence::DetailsIdSequence;
pub use table_exporter::TableExporter;
