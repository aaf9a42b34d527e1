pub mod builder;
pub mod gtf;
pub mod index;
pub mod reader;

pub use builder::TrackBuilder;
pub use gtf::{parse_line, GtfReader, GtfRecord};
pub use index::TrackIndex;
pub use reader::GtfTrackReader;
